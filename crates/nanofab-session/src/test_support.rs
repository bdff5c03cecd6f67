//! Shared fixtures for session tests.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use nanofab_core::{ExposurePattern, GridDims, LevelDef, LevelRegistry};
use nanofab_goal::GoalEvaluator;
use nanofab_mask::{ImageRasterizer, MaskCanvas, MaskError, PhotomaskRasterizer};
use nanofab_persist::{AuxState, GridSnapshot, PersistError, ProgressStore, SavedProgress};

use crate::config::SessionConfig;
use crate::session::Session;

pub fn builtin() -> Arc<LevelRegistry> {
    Arc::new(nanofab_levels::builtin_levels().expect("built-in levels"))
}

pub fn open_level(level_id: &str, store: Arc<dyn ProgressStore>) -> Session<ImageRasterizer> {
    Session::open(
        SessionConfig::default(),
        builtin(),
        level_id,
        ImageRasterizer::new(20),
        store,
    )
    .expect("open session")
}

/// PNG mask exposing the cells of goal layer `layer`, or its complement.
pub fn goal_layer_mask(level: &LevelDef, layer: usize, invert: bool) -> Vec<u8> {
    let dims = GridDims::default();
    let eval = GoalEvaluator::for_level(level, dims);
    let z = eval.compare_from_z() + layer;
    let pattern = ExposurePattern::from_fn(dims.size, |r, c| {
        eval.goal().is_filled(c, r, z) != invert
    });
    MaskCanvas::from_pattern(&pattern)
        .encode_png()
        .expect("encode mask")
}

/// Never finishes in any reasonable time.
pub struct SlowRasterizer;

impl PhotomaskRasterizer for SlowRasterizer {
    fn rasterize(
        &self,
        _image: Arc<[u8]>,
    ) -> impl Future<Output = Result<ExposurePattern, MaskError>> + Send {
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ExposurePattern::full(20))
        }
    }
}

/// Store whose writes always fail.
pub struct FailingStore;

impl ProgressStore for FailingStore {
    fn save(&self, level_id: &str, _: &GridSnapshot, _: &AuxState) -> Result<(), PersistError> {
        Err(PersistError::InvalidLevelId(level_id.to_string()))
    }

    fn load(&self, _: &str) -> Result<Option<SavedProgress>, PersistError> {
        Ok(None)
    }

    fn clear(&self, _: &str) -> Result<(), PersistError> {
        Ok(())
    }
}

/// Takes a moment, then exposes every column when the first image byte is 1
/// and none otherwise.
pub struct ByteRasterizer;

impl PhotomaskRasterizer for ByteRasterizer {
    fn rasterize(
        &self,
        image: Arc<[u8]>,
    ) -> impl Future<Output = Result<ExposurePattern, MaskError>> + Send {
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            if image.first() == Some(&1) {
                Ok(ExposurePattern::full(20))
            } else {
                Ok(ExposurePattern::new(20))
            }
        }
    }
}
