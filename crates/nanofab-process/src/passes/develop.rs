use nanofab_core::{ExposurePattern, Material, VoxelGrid};

/// Dissolve exposed photoresist.
///
/// In every exposed column all photoresist is removed, at any depth; other
/// materials and unexposed columns are unchanged. Returns the new grid and
/// the number of voxels removed.
pub fn develop(grid: &VoxelGrid, pattern: &ExposurePattern) -> (VoxelGrid, usize) {
    let mut next = grid.snapshot();
    let mut removed = 0;

    for (x, y) in grid.columns() {
        if !pattern.exposes(x, y) {
            continue;
        }
        for (z, m) in grid.column(x, y).iter().enumerate() {
            if *m == Material::Photoresist {
                next.set(x, y, z, Material::Empty);
                removed += 1;
            }
        }
    }

    log::debug!("develop removed {removed} resist voxels");
    (next, removed)
}
