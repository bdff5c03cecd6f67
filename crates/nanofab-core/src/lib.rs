pub mod constants;
pub mod error;
pub mod goal;
pub mod grid;
pub mod level;
pub mod material;
pub mod pattern;
pub mod types;

pub use error::CoreError;
pub use goal::{GoalRect, GoalSpec};
pub use grid::VoxelGrid;
pub use level::{LevelDef, LevelRegistry};
pub use material::Material;
pub use pattern::ExposurePattern;
pub use types::{GridDims, VoxelCoord};
