use glam::UVec3;
use nanofab_core::{VoxelCoord, VoxelGrid};

use crate::raster::GoalVoxels;

/// Which side of the comparison is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// Goal wants material, grid is empty.
    Missing,
    /// Grid has material the goal does not want.
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub pos: VoxelCoord,
    pub kind: MismatchKind,
}

fn mismatch_at(
    grid: &VoxelGrid,
    goal: &GoalVoxels,
    x: usize,
    y: usize,
    z: usize,
) -> Option<MismatchKind> {
    match (grid.occupied(x, y, z), goal.is_filled(x, y, z)) {
        (false, true) => Some(MismatchKind::Missing),
        (true, false) => Some(MismatchKind::Extra),
        _ => None,
    }
}

fn walk(
    grid: &VoxelGrid,
    goal: &GoalVoxels,
    compare_from_z: usize,
    mut visit: impl FnMut(usize, usize, usize, MismatchKind),
) {
    let dims = grid.dims();
    for (x, y) in grid.columns() {
        for z in compare_from_z..dims.max_height {
            if let Some(kind) = mismatch_at(grid, goal, x, y, z) {
                visit(x, y, z, kind);
            }
        }
    }
}

/// Count voxels at `z >= compare_from_z` whose occupancy differs from the goal.
pub fn diff_count(grid: &VoxelGrid, goal: &GoalVoxels, compare_from_z: usize) -> usize {
    let mut count = 0;
    walk(grid, goal, compare_from_z, |_, _, _, _| count += 1);
    count
}

/// Every mismatch counted by [`diff_count`], with position and kind.
pub fn diff_report(grid: &VoxelGrid, goal: &GoalVoxels, compare_from_z: usize) -> Vec<Mismatch> {
    let mut out = Vec::new();
    walk(grid, goal, compare_from_z, |x, y, z, kind| {
        out.push(Mismatch {
            pos: UVec3::new(x as u32, y as u32, z as u32),
            kind,
        })
    });
    out
}
