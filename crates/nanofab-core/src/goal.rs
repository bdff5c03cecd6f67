use serde::{Deserialize, Serialize};

/// One target region loaded from level data.
///
/// `x`, `y`, `w`, `h` are fractions of the wafer side; `l` is the layer
/// index counted from the first layer above the base stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub l: i32,
}

impl GoalRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64, l: i32) -> Self {
        Self { x, y, w, h, l }
    }

    /// Half-open column range `[start, end)` along x for a grid of `size` columns.
    pub fn x_cells(&self, size: usize) -> (usize, usize) {
        cell_span(self.x, self.w, size)
    }

    /// Half-open column range `[start, end)` along y.
    pub fn y_cells(&self, size: usize) -> (usize, usize) {
        cell_span(self.y, self.h, size)
    }
}

/// `[floor(start * size), floor((start + extent) * size))`, clamped to the grid.
fn cell_span(start: f64, extent: f64, size: usize) -> (usize, usize) {
    let n = size as f64;
    let lo = (start * n).floor().clamp(0.0, n) as usize;
    let hi = ((start + extent) * n).floor().clamp(0.0, n) as usize;
    (lo, hi.max(lo))
}

/// Ordered list of goal rectangles for one level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalSpec {
    pub rects: Vec<GoalRect>,
}

impl GoalSpec {
    pub fn new(rects: Vec<GoalRect>) -> Self {
        Self { rects }
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the goal has no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoalRect> {
        self.rects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_rect() {
        let r = GoalRect::new(0.4, 0.15, 0.05, 0.05, 2);
        assert_eq!(r.x_cells(20), (8, 9));
        assert_eq!(r.y_cells(20), (3, 4));
    }

    #[test]
    fn test_full_rect() {
        let r = GoalRect::new(0.0, 0.0, 1.0, 1.0, 0);
        assert_eq!(r.x_cells(20), (0, 20));
    }

    #[test]
    fn test_span_clamped() {
        let r = GoalRect::new(0.9, -0.2, 0.5, 0.1, 0);
        assert_eq!(r.x_cells(20), (18, 20));
        assert_eq!(r.y_cells(20), (0, 0));
    }

    #[test]
    fn test_goal_spec_len() {
        let spec = GoalSpec::new(vec![GoalRect::new(0.0, 0.0, 0.5, 0.5, 0)]);
        assert_eq!(spec.len(), 1);
        assert!(!spec.is_empty());
    }
}
