use std::future::Future;
use std::sync::Arc;

use image::imageops::FilterType;
use image::GrayImage;
use nanofab_core::constants::{MASK_CANONICAL_SIZE, MASK_LUMA_THRESHOLD};
use nanofab_core::ExposurePattern;

use crate::error::MaskError;

/// Turns an encoded mask image into an exposure pattern.
pub trait PhotomaskRasterizer: Send + Sync + 'static {
    fn rasterize(
        &self,
        image: Arc<[u8]>,
    ) -> impl Future<Output = Result<ExposurePattern, MaskError>> + Send;
}

/// Rasterizer backed by the `image` crate.
///
/// The image is converted to luma, resized to a square of `canonical_size`
/// pixels and sampled once per cell at the cell centre. Dark pixels expose.
#[derive(Debug, Clone, Copy)]
pub struct ImageRasterizer {
    grid_size: usize,
    canonical_size: u32,
    threshold: u8,
}

impl ImageRasterizer {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            canonical_size: MASK_CANONICAL_SIZE,
            threshold: MASK_LUMA_THRESHOLD,
        }
    }

    /// Blocking decode + sample. Prefer [`PhotomaskRasterizer::rasterize`]
    /// from async code.
    pub fn rasterize_bytes(&self, bytes: &[u8]) -> Result<ExposurePattern, MaskError> {
        let img = image::load_from_memory(bytes).map_err(|e| MaskError::Decode(e.to_string()))?;
        let gray = image::imageops::resize(
            &img.to_luma8(),
            self.canonical_size,
            self.canonical_size,
            FilterType::Triangle,
        );
        Ok(self.sample(&gray))
    }

    fn sample(&self, gray: &GrayImage) -> ExposurePattern {
        let n = self.grid_size;
        let side = gray.width().min(gray.height());
        let centre = |i: usize| -> u32 {
            let pos = (i as f64 + 0.5) * side as f64 / n as f64;
            (pos as u32).min(side.saturating_sub(1))
        };
        ExposurePattern::from_fn(n, |r, c| gray.get_pixel(centre(c), centre(r)).0[0] < self.threshold)
    }
}

impl PhotomaskRasterizer for ImageRasterizer {
    fn rasterize(
        &self,
        image: Arc<[u8]>,
    ) -> impl Future<Output = Result<ExposurePattern, MaskError>> + Send {
        let this = *self;
        async move {
            let pattern = tokio::task::spawn_blocking(move || this.rasterize_bytes(&image))
                .await
                .map_err(|e| MaskError::TaskFailed(e.to_string()))??;
            log::debug!(
                "Rasterized mask: {} of {} cells exposed",
                pattern.exposed_count(),
                this.grid_size * this.grid_size
            );
            Ok::<_, MaskError>(pattern)
        }
    }
}
