use serde::{Deserialize, Serialize};

use super::defaults;

/// Model lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Seconds of inactivity before models are unloaded.
    pub idle_timeout_secs: u64,
    /// Interval between idle-sweeper checks (milliseconds).
    pub sweep_interval_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: defaults::DEFAULT_IDLE_TIMEOUT_SECS,
            sweep_interval_ms: defaults::DEFAULT_SWEEP_INTERVAL_MS,
        }
    }
}
