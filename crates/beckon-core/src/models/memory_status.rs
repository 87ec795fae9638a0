use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Model lifecycle state.
///
/// Legal transitions: `Unloaded → Loading → Loaded → Unloaded`.
/// `Loading` is single-flight: at most one in-flight construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Unloaded,
    Loading,
    Loaded,
}

/// Snapshot of the lifecycle manager, polled by status displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStatus {
    pub state: LifecycleState,
    pub models_loaded: bool,
    /// True when idle unloading has released the models.
    pub rest_mode: bool,
    /// Exact accounting of loaded index + encoder tables, in bytes.
    pub index_bytes: usize,
    pub usage_count: u64,
    pub last_used: Option<DateTime<Utc>>,
}
