use nanofab_core::constants::DEFAULT_PROTECTED_LAYERS;
use nanofab_core::{ExposurePattern, LevelDef, VoxelGrid};

use crate::passes::{deposit, develop, etch, liftoff, planarize};
use crate::step::ProcessStep;

/// Why a step left the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The step needs a pattern and none was available.
    MissingPattern,
    /// The pattern does not match the grid's column count.
    PatternSizeMismatch { pattern: usize, grid: usize },
}

/// What happened to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step ran. `changed` counts voxels or columns touched, per step kind.
    Applied { changed: usize, capped_columns: usize },
    /// The step was a no-op as a whole.
    Skipped(SkipReason),
}

/// Result of one engine step: always a complete grid.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub grid: VoxelGrid,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn applied(&self) -> bool {
        matches!(self.status, StepStatus::Applied { .. })
    }
}

/// Pure, deterministic process engine.
///
/// Holds only level rules; the grid is passed in and a new one returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessEngine {
    protected_layers: usize,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_LAYERS)
    }
}

impl ProcessEngine {
    pub fn new(protected_layers: usize) -> Self {
        Self { protected_layers }
    }

    pub fn for_level(level: &LevelDef) -> Self {
        Self::new(level.protected_layers)
    }

    /// Apply one step to `grid`.
    ///
    /// `pattern` is consulted only by steps that need one. A step that needs
    /// a pattern and gets none, or gets one sized for another grid, is
    /// skipped and the grid comes back unchanged.
    pub fn apply(
        &self,
        grid: &VoxelGrid,
        step: &ProcessStep,
        pattern: Option<&ExposurePattern>,
    ) -> StepOutcome {
        let pattern = if step.needs_pattern() {
            match pattern {
                None => return Self::skipped(grid, SkipReason::MissingPattern),
                Some(p) if p.size() != grid.dims().size => {
                    return Self::skipped(
                        grid,
                        SkipReason::PatternSizeMismatch {
                            pattern: p.size(),
                            grid: grid.dims().size,
                        },
                    )
                }
                Some(p) => Some(p),
            }
        } else {
            None
        };

        let (next, changed, capped_columns) = match *step {
            ProcessStep::Deposit { material, .. } => {
                let (g, report) = deposit::deposit(grid, material, pattern);
                (g, report.filled_columns, report.capped_columns)
            }
            ProcessStep::SpinCoat => {
                let (g, report) = deposit::spin_coat(grid);
                (g, report.filled_columns, report.capped_columns)
            }
            ProcessStep::Etch { .. } => {
                let (g, removed) = etch::etch(grid, pattern, self.protected_layers);
                (g, removed, 0)
            }
            ProcessStep::Develop => match pattern {
                Some(p) => {
                    let (g, removed) = develop::develop(grid, p);
                    (g, removed, 0)
                }
                None => return Self::skipped(grid, SkipReason::MissingPattern),
            },
            ProcessStep::Liftoff => {
                let (g, lifted) = liftoff::liftoff(grid);
                (g, lifted, 0)
            }
            ProcessStep::Planarize => {
                let (g, removed) = planarize::planarize(grid);
                (g, removed, 0)
            }
        };

        log::debug!("{step}: changed {changed}, capped {capped_columns}");
        StepOutcome {
            grid: next,
            status: StepStatus::Applied {
                changed,
                capped_columns,
            },
        }
    }

    fn skipped(grid: &VoxelGrid, reason: SkipReason) -> StepOutcome {
        log::info!("step skipped: {reason:?}");
        StepOutcome {
            grid: grid.snapshot(),
            status: StepStatus::Skipped(reason),
        }
    }
}
