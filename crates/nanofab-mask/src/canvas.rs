use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use nanofab_core::constants::MASK_RENDER_SIZE;
use nanofab_core::ExposurePattern;

use crate::error::MaskError;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

/// Editable photomask: a square of cells the user paints before saving.
///
/// Rendering produces the picture the editor saves, which
/// [`ImageRasterizer`](crate::ImageRasterizer) turns back into the same cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskCanvas {
    cells: ExposurePattern,
}

impl MaskCanvas {
    pub fn new(size: usize) -> Self {
        Self {
            cells: ExposurePattern::new(size),
        }
    }

    pub fn from_pattern(pattern: &ExposurePattern) -> Self {
        Self {
            cells: pattern.clone(),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, filled: bool) {
        self.cells.set(row, col, filled);
    }

    /// Flip one cell. Returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let filled = !self.get(row, col);
        self.set(row, col, filled);
        self.get(row, col)
    }

    /// Reset every cell to transparent.
    pub fn clear(&mut self) {
        self.cells = ExposurePattern::new(self.size());
    }

    pub fn invert(&mut self) {
        let size = self.size();
        let old = &self.cells;
        self.cells = ExposurePattern::from_fn(size, |r, c| !old.get(r, c));
    }

    pub fn filled_count(&self) -> usize {
        self.cells.exposed_count()
    }

    pub fn to_pattern(&self) -> ExposurePattern {
        self.cells.clone()
    }

    /// White square, black filled cells, 1px black grid lines.
    pub fn render(&self) -> GrayImage {
        let side = MASK_RENDER_SIZE;
        let n = self.size().max(1) as u32;
        let cell_of = |px: u32| (px * n / side) as usize;

        let mut img = GrayImage::from_fn(side, side, |x, y| {
            if self.get(cell_of(y), cell_of(x)) {
                BLACK
            } else {
                WHITE
            }
        });

        for k in 0..=n {
            let line = (k * side / n).min(side - 1);
            for i in 0..side {
                img.put_pixel(line, i, BLACK);
                img.put_pixel(i, line, BLACK);
            }
        }
        img
    }

    /// Render and encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, MaskError> {
        let mut out = Vec::new();
        self.render()
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .map_err(|e| MaskError::Encode(e.to_string()))?;
        Ok(out)
    }
}
