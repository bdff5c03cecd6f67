use nanofab_core::{Material, VoxelGrid};

/// Chemical-mechanical polish: cut every column down to the lowest surface.
///
/// The floor is the minimum top height over the whole grid, so a single low
/// column flattens everything. When some column is empty the floor is -1 and
/// the grid is cleared. Returns the new grid and the number of voxels removed.
pub fn planarize(grid: &VoxelGrid) -> (VoxelGrid, usize) {
    let floor = grid.min_top_height();
    let keep = (floor + 1).max(0) as usize;
    let mut next = grid.snapshot();
    let mut removed = 0;

    for (x, y) in grid.columns() {
        let above = &grid.column(x, y)[keep..];
        removed += above.iter().filter(|m| !m.is_empty()).count();
        next.column_mut(x, y)[keep..].fill(Material::Empty);
    }

    log::debug!("planarize to z={floor}, removed {removed} voxels");
    (next, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanofab_core::GridDims;

    #[test]
    fn test_flatten_to_lowest_column() {
        let mut g = VoxelGrid::new(GridDims::new(3, 6), &[Material::Substrate, Material::Copper])
            .expect("grid");
        g.set(1, 1, 2, Material::SiliconOxide);
        g.set(0, 2, 1, Material::Empty);

        let (next, removed) = planarize(&g);
        assert_eq!(removed, 9);
        for (x, y) in next.columns() {
            assert_eq!(next.top_height(x, y), 0);
        }
    }

    #[test]
    fn test_uniform_grid_unchanged() {
        let g = VoxelGrid::new(GridDims::new(3, 6), &[Material::Substrate, Material::Copper])
            .expect("grid");
        let (next, removed) = planarize(&g);
        assert_eq!(removed, 0);
        assert_eq!(next, g);
    }

    #[test]
    fn test_empty_column_clears_grid() {
        let mut g = VoxelGrid::new(GridDims::new(2, 4), &[Material::Substrate]).expect("grid");
        g.set(1, 0, 0, Material::Empty);
        let (next, _) = planarize(&g);
        assert_eq!(next.count(Material::Substrate), 0);
    }

    #[test]
    fn test_holes_below_floor_kept() {
        let mut g = VoxelGrid::new(
            GridDims::new(2, 5),
            &[Material::Substrate, Material::Copper, Material::Copper],
        )
        .expect("grid");
        g.set(0, 0, 1, Material::Empty);
        let (next, _) = planarize(&g);
        assert_eq!(next.get(0, 0, 1), Material::Empty);
        assert_eq!(next.get(1, 1, 2), Material::Copper);
    }
}
