use thiserror::Error;

/// Errors from building grids and patterns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("grid dimensions must be non-zero (size {size}, max_height {max_height})")]
    InvalidDims { size: usize, max_height: usize },

    #[error("base stack has {layers} layers but columns hold only {max_height}")]
    BaseStackTooTall { layers: usize, max_height: usize },

    #[error("pattern needs {expected} cells, got {actual}")]
    PatternSize { expected: usize, actual: usize },
}
