use std::time::Duration;

use nanofab_core::constants::{RASTERIZE_TIMEOUT_MS, SESSION_QUEUE_CAPACITY};
use nanofab_core::GridDims;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Session tuning, loadable from RON. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub dims: GridDims,
    /// Deadline for rasterizing the mask of one masked step.
    pub rasterize_timeout_ms: u64,
    /// Requests a [`SessionHandle`](crate::SessionHandle) queues before senders wait.
    pub queue_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dims: GridDims::default(),
            rasterize_timeout_ms: RASTERIZE_TIMEOUT_MS,
            queue_capacity: SESSION_QUEUE_CAPACITY,
        }
    }
}

impl SessionConfig {
    pub fn from_ron(ron_str: &str) -> Result<Self, SessionError> {
        let config: Self = ron::Options::default()
            .from_str(ron_str)
            .map_err(|e| SessionError::Config(e.to_string()))?;
        if config.queue_capacity == 0 {
            return Err(SessionError::Config("queue_capacity must be at least 1".into()));
        }
        if config.dims.size == 0 || config.dims.max_height == 0 {
            return Err(SessionError::Config(format!(
                "grid dimensions must be non-zero, got {:?}",
                config.dims
            )));
        }
        Ok(config)
    }

    pub fn rasterize_timeout(&self) -> Duration {
        Duration::from_millis(self.rasterize_timeout_ms)
    }
}
