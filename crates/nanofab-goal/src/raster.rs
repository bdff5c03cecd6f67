use nanofab_core::{GoalSpec, GridDims, VoxelCoord};

/// Target occupancy, one flag per voxel, laid out like `VoxelGrid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalVoxels {
    dims: GridDims,
    filled: Vec<bool>,
}

impl GoalVoxels {
    pub fn empty(dims: GridDims) -> Self {
        Self {
            dims,
            filled: vec![false; dims.voxel_count()],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn is_filled(&self, x: usize, y: usize, z: usize) -> bool {
        self.dims.contains(x, y, z) && self.filled[self.dims.index(x, y, z)]
    }

    pub fn mark(&mut self, x: usize, y: usize, z: usize) {
        if self.dims.contains(x, y, z) {
            let idx = self.dims.index(x, y, z);
            self.filled[idx] = true;
        }
    }

    /// Number of target voxels.
    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|f| **f).count()
    }

    /// Coordinates of every target voxel.
    pub fn filled(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.filled
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(i, _)| self.dims.coord(i))
    }
}

/// Turn goal rectangles into target voxels.
///
/// Each rect covers columns `[floor(x*size), floor((x+w)*size))` by the same
/// rule in y, at height `l + base_offset`. Rects union; anything outside the
/// grid is dropped.
pub fn rasterize_goal(goal: &GoalSpec, base_offset: usize, dims: GridDims) -> GoalVoxels {
    let mut voxels = GoalVoxels::empty(dims);
    for rect in goal.iter() {
        let z = rect.l as i64 + base_offset as i64;
        if z < 0 || z >= dims.max_height as i64 {
            log::warn!("goal rect {rect:?} lies outside the grid at z={z}");
            continue;
        }
        let (x0, x1) = rect.x_cells(dims.size);
        let (y0, y1) = rect.y_cells(dims.size);
        for y in y0..y1 {
            for x in x0..x1 {
                voxels.mark(x, y, z as usize);
            }
        }
    }
    voxels
}
