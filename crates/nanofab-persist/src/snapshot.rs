use nanofab_core::{GridDims, Material, VoxelGrid};
use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Serializable copy of a grid.
///
/// Columns are listed row by row (y outer, x inner) and each one is trimmed
/// after its top occupied cell, so empty air is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub max_height: usize,
    pub columns: Vec<Vec<Material>>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        let dims = grid.dims();
        let columns = grid
            .columns()
            .map(|(x, y)| {
                let keep = (grid.top_height(x, y) + 1) as usize;
                grid.column(x, y)[..keep].to_vec()
            })
            .collect();
        Self {
            size: dims.size,
            max_height: dims.max_height,
            columns,
        }
    }

    pub fn dims(&self) -> GridDims {
        GridDims::new(self.size, self.max_height)
    }

    /// Rebuild the grid, refusing snapshots taken on a different grid shape.
    pub fn into_grid(&self, dims: GridDims) -> Result<VoxelGrid, PersistError> {
        if self.dims() != dims {
            return Err(PersistError::DimsMismatch {
                saved: self.dims(),
                expected: dims,
            });
        }
        if self.columns.len() != dims.column_count() {
            return Err(PersistError::ColumnCount {
                expected: dims.column_count(),
                actual: self.columns.len(),
            });
        }

        let mut grid = VoxelGrid::empty(dims)?;
        for (index, column) in self.columns.iter().enumerate() {
            if column.len() > dims.max_height {
                return Err(PersistError::ColumnTooTall {
                    index,
                    height: column.len(),
                    max_height: dims.max_height,
                });
            }
            let (x, y) = (index % dims.size, index / dims.size);
            grid.column_mut(x, y)[..column.len()].copy_from_slice(column);
        }
        Ok(grid)
    }
}

/// Everything saved alongside the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxState {
    /// Encoded mask image as the user last saved it.
    #[serde(default)]
    pub mask_image: Option<Vec<u8>>,
    #[serde(default)]
    pub completed: bool,
}

/// JSON body of a snapshot file.
#[derive(Serialize)]
pub(crate) struct PayloadRef<'a> {
    pub grid: &'a GridSnapshot,
    pub aux: &'a AuxState,
}

#[derive(Deserialize)]
pub(crate) struct Payload {
    pub grid: GridSnapshot,
    #[serde(default)]
    pub aux: AuxState,
}

/// Restored progress, ready for session reconstruction.
#[derive(Debug, Clone)]
pub struct SavedProgress {
    pub grid: GridSnapshot,
    pub aux: AuxState,
    /// Compatibility warnings (e.g., unknown header flags).
    pub warnings: Vec<String>,
}
