use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROTECTED_LAYERS;
use crate::goal::GoalSpec;
use crate::material::Material;

fn default_protected_layers() -> usize {
    DEFAULT_PROTECTED_LAYERS
}

/// A single level definition loaded from RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Stable level id, also the progress-store key.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Bottom layers present before any step, bottom first.
    pub base_stack: Vec<Material>,
    /// Bottom layers `etch` may not remove.
    #[serde(default = "default_protected_layers")]
    pub protected_layers: usize,
    /// Target structure.
    #[serde(default)]
    pub goal: GoalSpec,
}

impl LevelDef {
    /// Number of fixed layers; also the first z compared against the goal.
    pub fn base_height(&self) -> usize {
        self.base_stack.len()
    }
}

/// Immutable, ordered collection of levels.
#[derive(Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: Vec<LevelDef>,
}

impl LevelRegistry {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    /// Look up a level by id. Returns None if not found.
    pub fn get(&self, id: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// First level in play order.
    pub fn first(&self) -> Option<&LevelDef> {
        self.levels.first()
    }

    /// Level following `id` in play order.
    pub fn next_after(&self, id: &str) -> Option<&LevelDef> {
        let idx = self.levels.iter().position(|l| l.id == id)?;
        self.levels.get(idx + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDef> {
        self.levels.iter()
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
