pub mod canvas;
pub mod error;
pub mod rasterizer;

pub use canvas::MaskCanvas;
pub use error::MaskError;
pub use rasterizer::{ImageRasterizer, PhotomaskRasterizer};
