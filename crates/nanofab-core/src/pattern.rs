use crate::error::CoreError;

/// Per-column exposure flags for one masked step.
///
/// Indexed by row `r` and column `c` of the mask image; row maps to grid y,
/// column maps to grid x. `true` means light reaches the wafer there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposurePattern {
    size: usize,
    cells: Vec<bool>,
}

impl ExposurePattern {
    /// Pattern with every cell unexposed.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Pattern with every cell exposed.
    pub fn full(size: usize) -> Self {
        Self {
            size,
            cells: vec![true; size * size],
        }
    }

    /// Build from row-major flags.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, CoreError> {
        if cells.len() != size * size {
            return Err(CoreError::PatternSize {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for r in 0..size {
            for c in 0..size {
                cells.push(f(r, c));
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, exposed: bool) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = exposed;
        }
    }

    /// Whether grid column (x, y) is exposed.
    pub fn exposes(&self, x: usize, y: usize) -> bool {
        self.get(y, x)
    }

    pub fn exposed_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}
