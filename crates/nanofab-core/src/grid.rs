use crate::constants::EMPTY_COLUMN;
use crate::error::CoreError;
use crate::material::Material;
use crate::types::{GridDims, VoxelCoord};

/// Dense voxel grid, one [`Material`] per cell.
///
/// Process steps never edit a grid in place: they read one grid and write a
/// [`VoxelGrid::snapshot`] of it, so results cannot depend on column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: GridDims,
    /// Column-major storage, see [`GridDims::index`].
    cells: Vec<Material>,
}

impl VoxelGrid {
    /// All-empty grid.
    pub fn empty(dims: GridDims) -> Result<Self, CoreError> {
        if dims.size == 0 || dims.max_height == 0 {
            return Err(CoreError::InvalidDims {
                size: dims.size,
                max_height: dims.max_height,
            });
        }
        Ok(Self {
            dims,
            cells: vec![Material::Empty; dims.voxel_count()],
        })
    }

    /// Grid with `base_stack[z]` at height z of every column, empty above.
    pub fn new(dims: GridDims, base_stack: &[Material]) -> Result<Self, CoreError> {
        if base_stack.len() > dims.max_height {
            return Err(CoreError::BaseStackTooTall {
                layers: base_stack.len(),
                max_height: dims.max_height,
            });
        }
        let mut grid = Self::empty(dims)?;
        for column in grid.cells.chunks_exact_mut(dims.max_height) {
            column[..base_stack.len()].copy_from_slice(base_stack);
        }
        Ok(grid)
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Independent copy used as the "before" state of an operation.
    pub fn snapshot(&self) -> VoxelGrid {
        self.clone()
    }

    /// Material at a voxel. Out-of-range coordinates read as Empty.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Material {
        if !self.dims.contains(x, y, z) {
            return Material::Empty;
        }
        self.cells[self.dims.index(x, y, z)]
    }

    /// Set one voxel. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, z: usize, material: Material) {
        if self.dims.contains(x, y, z) {
            let idx = self.dims.index(x, y, z);
            self.cells[idx] = material;
        }
    }

    pub fn occupied(&self, x: usize, y: usize, z: usize) -> bool {
        !self.get(x, y, z).is_empty()
    }

    /// Cells of one column, bottom first.
    ///
    /// Unlike [`VoxelGrid::get`], panics when `(x, y)` is outside the grid.
    pub fn column(&self, x: usize, y: usize) -> &[Material] {
        let start = self.column_start(x, y);
        &self.cells[start..start + self.dims.max_height]
    }

    /// Mutable cells of one column. Panics when `(x, y)` is outside the grid.
    pub fn column_mut(&mut self, x: usize, y: usize) -> &mut [Material] {
        let start = self.column_start(x, y);
        &mut self.cells[start..start + self.dims.max_height]
    }

    fn column_start(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.dims.size && y < self.dims.size,
            "column ({x}, {y}) outside a {}x{} grid",
            self.dims.size,
            self.dims.size
        );
        self.dims.index(x, y, 0)
    }

    /// Highest non-empty z in a column, or [`EMPTY_COLUMN`].
    pub fn top_height(&self, x: usize, y: usize) -> i32 {
        self.column(x, y)
            .iter()
            .rposition(|m| !m.is_empty())
            .map_or(EMPTY_COLUMN, |z| z as i32)
    }

    /// Lowest top height over all columns.
    pub fn min_top_height(&self) -> i32 {
        self.columns()
            .map(|(x, y)| self.top_height(x, y))
            .min()
            .unwrap_or(EMPTY_COLUMN)
    }

    /// All (x, y) column coordinates, row by row.
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.dims.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    /// Every voxel with its coordinate.
    pub fn voxels(&self) -> impl Iterator<Item = (VoxelCoord, Material)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, m)| (self.dims.coord(i), *m))
    }

    /// Number of voxels holding `material`.
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|m| **m == material).count()
    }
}
