use nanofab_core::{GridDims, LevelDef, LevelRegistry, Material};
use std::collections::HashSet;
use thiserror::Error;

/// Slack for fractional rect bounds such as `0.6 + 0.4`.
const FRACTION_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate level id '{0}'")]
    DuplicateLevelId(String),
    #[error("Level '{level}' has an empty base stack")]
    EmptyBaseStack { level: String },
    #[error("Level '{level}' base stack has an empty layer at z={z}")]
    EmptyBaseLayer { level: String, z: usize },
    #[error("Level '{level}' base stack of {layers} layers exceeds grid height {max_height}")]
    BaseStackTooTall {
        level: String,
        layers: usize,
        max_height: usize,
    },
    #[error("Level '{level}' protects {protected} layers but its base stack has only {base}")]
    ProtectedAboveBase {
        level: String,
        protected: usize,
        base: usize,
    },
    #[error("Level '{level}' goal rect #{index} lies outside the unit square")]
    RectOutOfRange { level: String, index: usize },
    #[error("Level '{level}' goal rect #{index} covers no grid cells")]
    EmptyRect { level: String, index: usize },
    #[error("Level '{level}' goal rect #{index} sits at z={z}, outside the grid")]
    LayerOutOfGrid { level: String, index: usize, z: i64 },
}

fn in_unit(v: f64) -> bool {
    (-FRACTION_EPSILON..=1.0 + FRACTION_EPSILON).contains(&v)
}

fn validate_level(level: &LevelDef, dims: GridDims, errors: &mut Vec<ValidationError>) {
    let name = || level.id.clone();
    let base = level.base_stack.len();

    if base == 0 {
        errors.push(ValidationError::EmptyBaseStack { level: name() });
    }
    if let Some(z) = level.base_stack.iter().position(|m| *m == Material::Empty) {
        errors.push(ValidationError::EmptyBaseLayer { level: name(), z });
    }
    if base > dims.max_height {
        errors.push(ValidationError::BaseStackTooTall {
            level: name(),
            layers: base,
            max_height: dims.max_height,
        });
    }
    if level.protected_layers > base {
        errors.push(ValidationError::ProtectedAboveBase {
            level: name(),
            protected: level.protected_layers,
            base,
        });
    }

    for (index, rect) in level.goal.iter().enumerate() {
        let bounds_ok = in_unit(rect.x)
            && in_unit(rect.y)
            && in_unit(rect.x + rect.w)
            && in_unit(rect.y + rect.h);
        if !bounds_ok {
            errors.push(ValidationError::RectOutOfRange {
                level: name(),
                index,
            });
            continue;
        }

        let (x0, x1) = rect.x_cells(dims.size);
        let (y0, y1) = rect.y_cells(dims.size);
        if rect.w <= 0.0 || rect.h <= 0.0 || x0 == x1 || y0 == y1 {
            errors.push(ValidationError::EmptyRect {
                level: name(),
                index,
            });
        }

        let z = rect.l as i64 + base as i64;
        if rect.l < 0 || z >= dims.max_height as i64 {
            errors.push(ValidationError::LayerOutOfGrid {
                level: name(),
                index,
                z,
            });
        }
    }
}

/// Validate every level against the grid it will be played on.
pub fn validate_levels(
    registry: &LevelRegistry,
    dims: GridDims,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for level in registry.iter() {
        if !seen_ids.insert(level.id.as_str()) {
            errors.push(ValidationError::DuplicateLevelId(level.id.clone()));
        }
        validate_level(level, dims, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
