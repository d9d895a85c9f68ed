use std::collections::HashSet;
use std::collections::hash_set;

use rand::Rng;

use super::{Cell, Region};

/// LiveSet holds the live cells of the unbounded grid.
/// Dead cells are never stored, so memory follows population rather than world size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Cell>,
}

impl LiveSet {
    /// Create an empty set (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Mark a cell alive. Returns false if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Mark a cell dead. Returns false if it already was.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Population
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count live cells in the Moore neighbourhood of `cell`
    pub fn live_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors().filter(|&n| self.contains(n)).count()
    }

    /// Smallest region containing every live cell, `None` when empty
    pub fn bounds(&self) -> Option<Region> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some(Region { min, max })
    }

    /// Random soup: each cell of `region` is alive with probability `density`
    pub fn random_soup<R: Rng + ?Sized>(region: Region, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        region
            .cells()
            .filter(|_| rng.random_bool(density))
            .collect()
    }
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for LiveSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
