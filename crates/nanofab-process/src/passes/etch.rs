use nanofab_core::{ExposurePattern, Material, VoxelGrid};

use super::column_enabled;

/// Remove the top voxel of every enabled column.
///
/// Columns whose top height is below `protected_layers` are left alone, so
/// `protected_layers = 1` keeps z = 0 and an empty column is never touched.
/// Returns the new grid and the number of voxels removed.
pub fn etch(
    grid: &VoxelGrid,
    pattern: Option<&ExposurePattern>,
    protected_layers: usize,
) -> (VoxelGrid, usize) {
    let mut next = grid.snapshot();
    let mut removed = 0;

    for (x, y) in grid.columns() {
        if !column_enabled(pattern, x, y) {
            continue;
        }
        let top = grid.top_height(x, y);
        if top >= protected_layers as i32 {
            next.set(x, y, top as usize, Material::Empty);
            removed += 1;
        }
    }

    log::debug!("etch removed {removed} voxels");
    (next, removed)
}
