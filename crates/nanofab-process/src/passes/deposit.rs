use nanofab_core::{ExposurePattern, Material, VoxelGrid};

use super::column_enabled;

/// Per-call summary of a deposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepositReport {
    /// Enabled columns that received a voxel.
    pub filled_columns: usize,
    /// Enabled columns already at the height ceiling, left unchanged.
    pub capped_columns: usize,
}

/// Grow one voxel of `material` on top of every enabled column.
///
/// A column whose top is already at `max_height - 1` is skipped.
pub fn deposit(
    grid: &VoxelGrid,
    material: Material,
    pattern: Option<&ExposurePattern>,
) -> (VoxelGrid, DepositReport) {
    let max_height = grid.dims().max_height as i32;
    let mut next = grid.snapshot();
    let mut report = DepositReport::default();

    for (x, y) in grid.columns() {
        if !column_enabled(pattern, x, y) {
            continue;
        }
        let target = grid.top_height(x, y) + 1;
        if target < max_height {
            next.set(x, y, target as usize, material);
            report.filled_columns += 1;
        } else {
            report.capped_columns += 1;
        }
    }

    if report.capped_columns > 0 {
        log::debug!(
            "deposit {material}: {} columns at height ceiling",
            report.capped_columns
        );
    }
    (next, report)
}

/// Blanket photoresist coat.
pub fn spin_coat(grid: &VoxelGrid) -> (VoxelGrid, DepositReport) {
    deposit(grid, Material::Photoresist, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanofab_core::GridDims;

    fn base() -> VoxelGrid {
        VoxelGrid::new(GridDims::new(4, 3), &[Material::Substrate]).expect("grid")
    }

    #[test]
    fn test_blanket_deposit() {
        let (g, report) = deposit(&base(), Material::Copper, None);
        assert_eq!(report.filled_columns, 16);
        for (x, y) in g.columns() {
            assert_eq!(g.get(x, y, 1), Material::Copper);
            assert_eq!(g.top_height(x, y), 1);
        }
    }

    #[test]
    fn test_masked_deposit_only_exposed_columns() {
        let mut p = ExposurePattern::new(4);
        p.set(0, 1, true);
        let (g, report) = deposit(&base(), Material::SiliconOxide, Some(&p));
        assert_eq!(report.filled_columns, 1);
        assert_eq!(g.get(1, 0, 1), Material::SiliconOxide);
        assert_eq!(g.count(Material::SiliconOxide), 1);
    }

    #[test]
    fn test_deposit_lands_on_top_of_hole() {
        let mut g = base();
        g.set(2, 2, 2, Material::Copper);
        let (g, report) = deposit(&g, Material::AmorphousSilicon, None);
        // (2,2) is already at the ceiling.
        assert_eq!(report.capped_columns, 1);
        assert_eq!(g.get(2, 2, 1), Material::Empty);
        assert_eq!(g.get(0, 0, 1), Material::AmorphousSilicon);
    }

    #[test]
    fn test_deposit_into_empty_column_starts_at_zero() {
        let g = VoxelGrid::empty(GridDims::new(2, 3)).expect("grid");
        let (g, _) = deposit(&g, Material::Copper, None);
        assert_eq!(g.get(1, 1, 0), Material::Copper);
    }

    #[test]
    fn test_capacity_ceiling_is_silent() {
        let mut g = base();
        for _ in 0..5 {
            g = deposit(&g, Material::Copper, None).0;
        }
        assert_eq!(g.top_height(0, 0), 2);
        let (again, report) = deposit(&g, Material::Copper, None);
        assert_eq!(again, g);
        assert_eq!(report.capped_columns, 16);
        assert_eq!(report.filled_columns, 0);
    }

    #[test]
    fn test_spin_coat() {
        let (g, _) = spin_coat(&base());
        assert_eq!(g.count(Material::Photoresist), 16);
    }
}
