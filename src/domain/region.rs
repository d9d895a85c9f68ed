use super::Cell;

/// Inclusive rectangle of cells, `min` top-left and `max` bottom-right
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Region {
    pub min: Cell,
    pub max: Cell,
}

impl Region {
    /// Build a region from any two corners
    pub fn new(a: Cell, b: Cell) -> Self {
        Self {
            min: Cell::new(a.x.min(b.x), a.y.min(b.y)),
            max: Cell::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub const fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    pub const fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells, saturating at `u64::MAX`
    pub const fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Centred sub-region of at most `max_cells` cells (never less than one)
    pub fn capped(self, max_cells: u64) -> Self {
        if self.area() <= max_cells {
            return self;
        }
        let width = self.width().min(max_cells.isqrt().max(1));
        let height = self.height().min((max_cells / width).max(1));
        let centred = |min: i64, full: u64, part: u64| min.wrapping_add(((full - part) / 2) as i64);

        let min = Cell::new(
            centred(self.min.x, self.width(), width),
            centred(self.min.y, self.height(), height),
        );
        Self {
            min,
            max: min.offset(width as i64 - 1, height as i64 - 1),
        }
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x
            && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Iterate over all cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Cell::new(x, y)))
    }
}
