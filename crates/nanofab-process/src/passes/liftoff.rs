use nanofab_core::{Material, VoxelGrid};

/// Strip photoresist together with everything resting on it.
///
/// Each column is scanned bottom-up; the first photoresist voxel and every
/// voxel above it are cleared. Resist higher up in the same column goes with
/// the cascade. Returns the new grid and the number of columns lifted.
pub fn liftoff(grid: &VoxelGrid) -> (VoxelGrid, usize) {
    let mut next = grid.snapshot();
    let mut lifted = 0;

    for (x, y) in grid.columns() {
        let column = grid.column(x, y);
        if let Some(k) = column.iter().position(|m| *m == Material::Photoresist) {
            next.column_mut(x, y)[k..].fill(Material::Empty);
            lifted += 1;
        }
    }

    log::debug!("liftoff cleared {lifted} columns");
    (next, lifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanofab_core::GridDims;

    #[test]
    fn test_cascade_clears_resist_and_above() {
        let mut g = VoxelGrid::new(GridDims::new(2, 8), &[Material::Substrate]).expect("grid");
        let k = 2;
        g.set(0, 0, 1, Material::SiliconOxide);
        g.set(0, 0, k, Material::Photoresist);
        g.set(0, 0, k + 1, Material::Copper);
        g.set(0, 0, k + 2, Material::AmorphousSilicon);
        g.set(0, 0, k + 3, Material::Copper);

        let (next, lifted) = liftoff(&g);
        assert_eq!(lifted, 1);
        for z in k..=k + 3 {
            assert_eq!(next.get(0, 0, z), Material::Empty, "z={z} should be cleared");
        }
        assert_eq!(next.get(0, 0, 0), Material::Substrate);
        assert_eq!(next.get(0, 0, 1), Material::SiliconOxide);
    }

    #[test]
    fn test_columns_without_resist_untouched() {
        let g = VoxelGrid::new(GridDims::new(2, 4), &[Material::Substrate, Material::Copper])
            .expect("grid");
        let (next, lifted) = liftoff(&g);
        assert_eq!(lifted, 0);
        assert_eq!(next, g);
    }

    #[test]
    fn test_lowest_resist_wins() {
        let g = VoxelGrid::new(
            GridDims::new(1, 6),
            &[
                Material::Substrate,
                Material::Photoresist,
                Material::Copper,
                Material::Photoresist,
                Material::Copper,
            ],
        )
        .expect("grid");
        let (next, _) = liftoff(&g);
        assert_eq!(next.top_height(0, 0), 0);
    }
}
