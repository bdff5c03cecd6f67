//! Levels shipped with the engine.

use nanofab_core::LevelRegistry;

use crate::loader::{load_levels_from_str, LoadError};

const BUILTIN_LEVELS_RON: &str = include_str!("../../../data/levels.ron");

/// Parse the built-in level set, in play order.
pub fn builtin_levels() -> Result<LevelRegistry, LoadError> {
    load_levels_from_str(BUILTIN_LEVELS_RON)
}
