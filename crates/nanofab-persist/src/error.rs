use nanofab_core::{CoreError, GridDims};

/// Errors that can occur while saving or restoring progress.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid magic bytes (expected NFAB)")]
    InvalidMagic,

    #[error("unsupported snapshot format version {0}")]
    UnsupportedVersion(u16),

    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("LZ4 decompression failed: {0}")]
    DecompressError(String),

    #[error("snapshot payload is not valid JSON: {0}")]
    PayloadError(String),

    #[error("snapshot was taken on a {saved:?} grid, expected {expected:?}")]
    DimsMismatch { saved: GridDims, expected: GridDims },

    #[error("snapshot has {actual} columns, expected {expected}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("snapshot column {index} holds {height} cells, grid height is {max_height}")]
    ColumnTooTall {
        index: usize,
        height: usize,
        max_height: usize,
    },

    #[error("level id '{0}' cannot be used as a file name")]
    InvalidLevelId(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
