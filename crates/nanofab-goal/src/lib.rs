pub mod diff;
pub mod evaluator;
pub mod raster;

pub use diff::{diff_count, diff_report, Mismatch, MismatchKind};
pub use evaluator::{GoalEvaluator, Score};
pub use raster::{rasterize_goal, GoalVoxels};
