use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, MAX_HEIGHT};

/// Voxel coordinate: x, y across the wafer, z up the column.
pub type VoxelCoord = UVec3;

/// Grid dimensions. Columns are `size x size`, each `max_height` voxels tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub size: usize,
    pub max_height: usize,
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            max_height: MAX_HEIGHT,
        }
    }
}

impl GridDims {
    pub fn new(size: usize, max_height: usize) -> Self {
        Self { size, max_height }
    }

    /// Number of (x, y) columns.
    pub fn column_count(&self) -> usize {
        self.size * self.size
    }

    /// Total number of voxels.
    pub fn voxel_count(&self) -> usize {
        self.column_count() * self.max_height
    }

    /// Flat index of a voxel. Columns are contiguous in z.
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size + x) * self.max_height + z
    }

    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size && y < self.size && z < self.max_height
    }

    /// Coordinate for a flat index produced by [`GridDims::index`].
    pub fn coord(&self, index: usize) -> VoxelCoord {
        let z = index % self.max_height;
        let column = index / self.max_height;
        UVec3::new((column % self.size) as u32, (column / self.size) as u32, z as u32)
    }
}
