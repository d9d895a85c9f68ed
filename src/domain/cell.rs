/// Cell is a location on the unbounded grid.
/// Whether it is alive is decided by membership in a `LiveSet`, not by the cell itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the Moore neighbourhood, centre excluded
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell shifted by the given delta; coordinates wrap at the `i64` edges
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The 8 cells horizontally, vertically or diagonally adjacent
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_eight_distinct_cells() {
        let centre = Cell::new(3, -7);
        let mut neighbors: Vec<_> = centre.neighbors().collect();
        neighbors.sort_by_key(|c| (c.x, c.y));
        neighbors.dedup();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&centre));
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let centre = Cell::new(0, 0);
        assert!(centre
            .neighbors()
            .all(|n| n.x.abs() <= 1 && n.y.abs() <= 1));
    }

    #[test]
    fn test_neighbors_at_coordinate_limits() {
        let corner = Cell::new(i64::MAX, i64::MIN);
        let neighbors: Vec<_> = corner.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Cell::new(i64::MIN, i64::MAX)));
        assert!(neighbors.contains(&Cell::new(i64::MAX - 1, i64::MIN + 1)));
    }

    #[test]
    fn test_equality_by_coordinates() {
        assert_eq!(Cell::new(1, 2), Cell::from((1, 2)));
        assert_ne!(Cell::new(1, 2), Cell::new(2, 1));
    }
}
