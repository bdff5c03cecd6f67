//! Single source of truth for shared constants.
//! Runtime code reads dimensions from `GridDims`; these are the defaults.

/// Side length of the wafer grid in columns (x and y).
pub const GRID_SIZE: usize = 20;

/// Number of voxel layers per column (z).
pub const MAX_HEIGHT: usize = 30;

/// Top height reported for a column with no material at all.
pub const EMPTY_COLUMN: i32 = -1;

/// Bottom layers `etch` never removes unless a level says otherwise.
pub const DEFAULT_PROTECTED_LAYERS: usize = 1;

/// Side length, in pixels, masks are resampled to before sampling cell centres.
pub const MASK_CANONICAL_SIZE: u32 = 200;

/// Luma below this value counts as an opaque (exposing) mask cell. 50% of 255, rounded up.
pub const MASK_LUMA_THRESHOLD: u8 = 128;

/// Side length, in pixels, of a rendered mask image.
pub const MASK_RENDER_SIZE: u32 = 400;

/// Default rasterizer deadline for one masked step.
pub const RASTERIZE_TIMEOUT_MS: u64 = 5000;

/// Default capacity of the session request queue.
pub const SESSION_QUEUE_CAPACITY: usize = 32;
