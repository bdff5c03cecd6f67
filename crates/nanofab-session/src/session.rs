use std::sync::Arc;

use nanofab_core::{ExposurePattern, GridDims, LevelDef, LevelRegistry, VoxelGrid};
use nanofab_goal::{GoalEvaluator, Score};
use nanofab_mask::PhotomaskRasterizer;
use nanofab_persist::{AuxState, GridSnapshot, ProgressStore};
use nanofab_process::{ProcessEngine, ProcessStep, StepStatus};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// What observers see: a complete grid and its score, never a half-built one.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub level_id: String,
    pub grid: Arc<VoxelGrid>,
    pub score: Score,
    pub has_mask: bool,
}

/// Result of one user step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: ProcessStep,
    pub status: StepStatus,
    pub score: Score,
    /// The new state reached the store. Always false for skipped steps,
    /// which write nothing.
    pub persisted: bool,
}

/// Result of [`Session::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetReport {
    pub score: Score,
    /// The base stack reached the store.
    pub persisted: bool,
}

/// Everything that changes together when a level is entered.
struct LevelState {
    level: LevelDef,
    engine: ProcessEngine,
    evaluator: GoalEvaluator,
    base_grid: Arc<VoxelGrid>,
    grid: Arc<VoxelGrid>,
    mask_image: Option<Arc<[u8]>>,
    score: Score,
}

impl LevelState {
    /// Build the level's state, resuming saved progress when the store has
    /// usable progress for it.
    fn enter(
        level: &LevelDef,
        dims: GridDims,
        store: &dyn ProgressStore,
    ) -> Result<Self, SessionError> {
        let base_grid = Arc::new(VoxelGrid::new(dims, &level.base_stack)?);
        let (grid, mask_image) = match store.load(&level.id) {
            Ok(Some(saved)) => {
                for warning in &saved.warnings {
                    log::warn!("Progress for '{}': {warning}", level.id);
                }
                match saved.grid.into_grid(dims) {
                    Ok(grid) => {
                        log::info!("Resumed saved progress for '{}'", level.id);
                        (Arc::new(grid), saved.aux.mask_image.map(Arc::from))
                    }
                    Err(e) => {
                        log::warn!("Discarding saved progress for '{}': {e}", level.id);
                        (base_grid.clone(), None)
                    }
                }
            }
            Ok(None) => (base_grid.clone(), None),
            Err(e) => {
                log::warn!("Saved progress for '{}' is unreadable: {e}", level.id);
                (base_grid.clone(), None)
            }
        };

        let evaluator = GoalEvaluator::for_level(level, dims);
        let score = evaluator.evaluate(&grid);
        Ok(Self {
            level: level.clone(),
            engine: ProcessEngine::for_level(level),
            evaluator,
            base_grid,
            grid,
            mask_image,
            score,
        })
    }
}

/// One player's fabrication session on one level at a time.
///
/// The grid is only ever replaced whole, after a step has been computed in
/// full. Each change is written to the store; a failing store is logged and
/// reported but never rolls the grid back.
pub struct Session<R: PhotomaskRasterizer> {
    config: SessionConfig,
    levels: Arc<LevelRegistry>,
    rasterizer: R,
    store: Arc<dyn ProgressStore>,
    state: LevelState,
}

impl<R: PhotomaskRasterizer> Session<R> {
    pub fn open(
        config: SessionConfig,
        levels: Arc<LevelRegistry>,
        level_id: &str,
        rasterizer: R,
        store: Arc<dyn ProgressStore>,
    ) -> Result<Self, SessionError> {
        let level = levels
            .get(level_id)
            .ok_or_else(|| SessionError::UnknownLevel(level_id.to_string()))?;
        let state = LevelState::enter(level, config.dims, store.as_ref())?;
        Ok(Self {
            config,
            levels,
            rasterizer,
            store,
            state,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn level(&self) -> &LevelDef {
        &self.state.level
    }

    pub fn grid(&self) -> &Arc<VoxelGrid> {
        &self.state.grid
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn mask_image(&self) -> Option<&[u8]> {
        self.state.mask_image.as_deref()
    }

    /// Id of the level after this one, if any.
    pub fn next_level_id(&self) -> Option<&str> {
        self.levels
            .next_after(&self.state.level.id)
            .map(|l| l.id.as_str())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            level_id: self.state.level.id.clone(),
            grid: self.state.grid.clone(),
            score: self.state.score,
            has_mask: self.state.mask_image.is_some(),
        }
    }

    /// Keep `image` as the mask for later masked steps. The bytes are not
    /// decoded until a step needs them.
    pub fn save_mask(&mut self, image: Vec<u8>) -> bool {
        self.state.mask_image = Some(Arc::from(image));
        self.persist()
    }

    pub fn clear_mask(&mut self) -> bool {
        self.state.mask_image = None;
        self.persist()
    }

    /// Run one process step against the current grid.
    pub async fn apply(&mut self, step: ProcessStep) -> StepReport {
        let pattern = if step.needs_pattern() {
            self.current_pattern().await
        } else {
            None
        };

        let outcome = self
            .state
            .engine
            .apply(&self.state.grid, &step, pattern.as_ref());
        let persisted = if outcome.applied() {
            self.replace_grid(outcome.grid);
            self.persist()
        } else {
            false
        };

        StepReport {
            step,
            status: outcome.status,
            score: self.state.score,
            persisted,
        }
    }

    /// Back to the level's base stack. The saved mask is kept.
    pub fn reset(&mut self) -> ResetReport {
        let base = self.state.base_grid.clone();
        self.state.grid = base;
        self.state.score = self.state.evaluator.evaluate(&self.state.grid);
        ResetReport {
            score: self.state.score,
            persisted: self.persist(),
        }
    }

    /// Leave the current level and enter `level_id`, resuming its progress.
    pub fn switch_level(&mut self, level_id: &str) -> Result<SessionView, SessionError> {
        let level = self
            .levels
            .get(level_id)
            .ok_or_else(|| SessionError::UnknownLevel(level_id.to_string()))?;
        self.state = LevelState::enter(level, self.config.dims, self.store.as_ref())?;
        log::info!("Entered level '{}'", level_id);
        Ok(self.view())
    }

    /// Decode the saved mask, or `None` when there is none or it cannot be
    /// turned into a pattern in time.
    async fn current_pattern(&self) -> Option<ExposurePattern> {
        let image = self.state.mask_image.clone()?;
        let timeout = self.config.rasterize_timeout();
        match tokio::time::timeout(timeout, self.rasterizer.rasterize(image)).await {
            Ok(Ok(pattern)) => Some(pattern),
            Ok(Err(e)) => {
                log::warn!("Mask for '{}' is unusable: {e}", self.state.level.id);
                None
            }
            Err(_) => {
                log::warn!(
                    "Mask for '{}' not rasterized within {} ms",
                    self.state.level.id,
                    self.config.rasterize_timeout_ms
                );
                None
            }
        }
    }

    fn replace_grid(&mut self, grid: VoxelGrid) {
        let was_completed = self.state.score.completed;
        self.state.grid = Arc::new(grid);
        self.state.score = self.state.evaluator.evaluate(&self.state.grid);
        if self.state.score.completed && !was_completed {
            log::info!("Level '{}' completed", self.state.level.id);
        }
    }

    fn persist(&self) -> bool {
        let aux = AuxState {
            mask_image: self.state.mask_image.as_deref().map(<[u8]>::to_vec),
            completed: self.state.score.completed,
        };
        let snapshot = GridSnapshot::from_grid(&self.state.grid);
        match self.store.save(&self.state.level.id, &snapshot, &aux) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not save progress for '{}': {e}", self.state.level.id);
                false
            }
        }
    }
}
