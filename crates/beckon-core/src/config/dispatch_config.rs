use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence gate and dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Confidence at or above which a resolution is executed.
    pub execute_threshold: f64,
    /// Confidence at or above which a candidate is surfaced, below which
    /// the input is reported as not recognized.
    pub surface_threshold: f64,
    /// Delay between sequential steps of a multi-step dispatch (ms).
    pub inter_step_delay_ms: u64,
    /// Maximum retained history entries.
    pub history_capacity: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            execute_threshold: defaults::DEFAULT_EXECUTE_THRESHOLD,
            surface_threshold: defaults::DEFAULT_SURFACE_THRESHOLD,
            inter_step_delay_ms: defaults::DEFAULT_INTER_STEP_DELAY_MS,
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}
