/// Cross-pass properties and full-size process scenarios.
///
/// Grids here are built from a small deterministic generator so the
/// properties run over many irregular surfaces without a random crate.

#[cfg(test)]
mod tests {
    use nanofab_core::constants::{GRID_SIZE, MAX_HEIGHT};
    use nanofab_core::material::ALL_MATERIALS;
    use nanofab_core::{ExposurePattern, GridDims, Material, VoxelGrid};

    use crate::engine::ProcessEngine;
    use crate::passes::{deposit, develop, etch, liftoff, planarize};
    use crate::step::ProcessStep;

    /// xorshift32, enough to scatter column heights.
    fn next(state: &mut u32) -> u32 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        *state = x;
        x
    }

    /// Grid with a one-layer base and a random solid stack per column.
    fn rough_grid(seed: u32, dims: GridDims, tallest: usize) -> VoxelGrid {
        let mut state = seed.max(1);
        let mut grid = VoxelGrid::new(dims, &[Material::Substrate]).expect("grid");
        for (x, y) in grid.snapshot().columns() {
            let h = (next(&mut state) as usize) % tallest;
            for z in 1..=h {
                let m = ALL_MATERIALS[1 + (next(&mut state) as usize) % 5];
                grid.set(x, y, z, m);
            }
        }
        grid
    }

    #[test]
    fn test_planarize_idempotent() {
        for seed in 1..20 {
            let g = rough_grid(seed, GridDims::new(8, 12), 10);
            let once = planarize::planarize(&g).0;
            let twice = planarize::planarize(&once).0;
            assert_eq!(once, twice, "seed {seed}");
        }
    }

    #[test]
    fn test_deposit_then_etch_restores() {
        let dims = GridDims::new(8, 12);
        for seed in 1..20 {
            let g = rough_grid(seed, dims, 10);
            for material in [Material::Copper, Material::SiliconOxide, Material::Photoresist] {
                let up = deposit::deposit(&g, material, None).0;
                let down = etch::etch(&up, None, 1).0;
                assert_eq!(down, g, "seed {seed}, {material}");
            }
        }
    }

    #[test]
    fn test_develop_full_pattern_removes_every_resist() {
        for seed in 1..10 {
            let g = rough_grid(seed, GridDims::new(6, 10), 9);
            let (next, _) = develop::develop(&g, &ExposurePattern::full(6));
            assert_eq!(next.count(Material::Photoresist), 0);
            let others = |grid: &VoxelGrid| {
                grid.voxels()
                    .filter(|(_, m)| !m.is_empty() && *m != Material::Photoresist)
                    .count()
            };
            assert_eq!(others(&next), others(&g));
        }
    }

    #[test]
    fn test_liftoff_leaves_no_resist() {
        for seed in 1..10 {
            let g = rough_grid(seed, GridDims::new(6, 10), 9);
            let (next, _) = liftoff::liftoff(&g);
            assert_eq!(next.count(Material::Photoresist), 0);
            // Below the first resist voxel nothing moves.
            for (x, y) in g.columns() {
                let col = g.column(x, y);
                let k = col
                    .iter()
                    .position(|m| *m == Material::Photoresist)
                    .unwrap_or(col.len());
                assert_eq!(&next.column(x, y)[..k], &col[..k]);
            }
        }
    }

    #[test]
    fn test_result_independent_of_column_order() {
        // Transposing the grid and pattern must transpose the result.
        let dims = GridDims::new(6, 10);
        let g = rough_grid(7, dims, 8);
        let p = ExposurePattern::from_fn(6, |r, c| (r + 2 * c) % 3 == 0);

        let mut gt = g.snapshot();
        for (x, y) in g.columns() {
            gt.column_mut(y, x).copy_from_slice(g.column(x, y));
        }
        let pt = ExposurePattern::from_fn(6, |r, c| p.get(c, r));

        let a = etch::etch(&g, Some(&p), 1).0;
        let b = etch::etch(&gt, Some(&pt), 1).0;
        for (x, y) in a.columns() {
            assert_eq!(a.column(x, y), b.column(y, x));
        }
    }

    #[test]
    fn test_full_size_scenario() {
        let dims = GridDims::new(GRID_SIZE, MAX_HEIGHT);
        let engine = ProcessEngine::default();
        let base = VoxelGrid::new(dims, &[Material::Substrate]).expect("grid");
        let base_height = 1;

        let copper = ProcessStep::Deposit {
            material: Material::Copper,
            masked: false,
        };
        let oxide = ProcessStep::Deposit {
            material: Material::SiliconOxide,
            masked: false,
        };

        let g = engine.apply(&base, &copper, None).grid;
        for (x, y) in g.columns() {
            assert_eq!(g.top_height(x, y), base_height);
        }
        let g = engine.apply(&g, &oxide, None).grid;
        for (x, y) in g.columns() {
            assert_eq!(g.top_height(x, y), base_height + 1);
        }
        let flat = engine.apply(&g, &ProcessStep::Planarize, None).grid;
        assert_eq!(flat, g, "uniform surface must survive CMP");

        // Etch a 2x2 corner, then polish everything down to it.
        let corner = ExposurePattern::from_fn(GRID_SIZE, |r, c| r < 2 && c < 2);
        let etched = engine
            .apply(&g, &ProcessStep::Etch { masked: true }, Some(&corner))
            .grid;
        assert_eq!(etched.top_height(0, 0), base_height);
        assert_eq!(etched.top_height(5, 5), base_height + 1);

        let polished = engine.apply(&etched, &ProcessStep::Planarize, None).grid;
        assert_eq!(polished.count(Material::SiliconOxide), 0);
        assert_eq!(polished.count(Material::Copper), 400);
        let lowered = g
            .columns()
            .filter(|&(x, y)| polished.top_height(x, y) < g.top_height(x, y))
            .count();
        assert_eq!(lowered, 400);
        let oxide_lost = g
            .columns()
            .filter(|&(x, y)| !(x < 2 && y < 2))
            .filter(|&(x, y)| polished.get(x, y, 2) != g.get(x, y, 2))
            .count();
        assert_eq!(oxide_lost, 396);
    }
}
