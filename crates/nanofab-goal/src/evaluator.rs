use nanofab_core::{GridDims, LevelDef, VoxelGrid};

use crate::diff::{diff_report, Mismatch, MismatchKind};
use crate::raster::{rasterize_goal, GoalVoxels};

/// Progress against a level goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub mismatches: usize,
    pub missing: usize,
    pub extra: usize,
    pub completed: bool,
}

/// Scores grids against one level's goal.
///
/// The goal is rasterized once; every evaluation walks the whole grid above
/// the base stack.
#[derive(Debug, Clone)]
pub struct GoalEvaluator {
    goal: GoalVoxels,
    compare_from_z: usize,
}

impl GoalEvaluator {
    pub fn new(goal: GoalVoxels, compare_from_z: usize) -> Self {
        Self {
            goal,
            compare_from_z,
        }
    }

    /// Goal layers sit on the base stack, and the base stack itself is not scored.
    pub fn for_level(level: &LevelDef, dims: GridDims) -> Self {
        let base = level.base_height();
        Self::new(rasterize_goal(&level.goal, base, dims), base)
    }

    pub fn goal(&self) -> &GoalVoxels {
        &self.goal
    }

    pub fn compare_from_z(&self) -> usize {
        self.compare_from_z
    }

    pub fn evaluate(&self, grid: &VoxelGrid) -> Score {
        let report = self.mismatches(grid);
        let missing = report
            .iter()
            .filter(|m| m.kind == MismatchKind::Missing)
            .count();
        Score {
            mismatches: report.len(),
            missing,
            extra: report.len() - missing,
            completed: report.is_empty(),
        }
    }

    pub fn mismatches(&self, grid: &VoxelGrid) -> Vec<Mismatch> {
        if grid.dims() != self.goal.dims() {
            log::warn!(
                "scoring a {:?} grid against a {:?} goal",
                grid.dims(),
                self.goal.dims()
            );
        }
        diff_report(grid, &self.goal, self.compare_from_z)
    }
}
