use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attempted dispatch, as recorded in the command history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// Human-readable description, e.g. `"open the calc" -> open_calculator`.
    pub description: String,
    pub success: bool,
}

impl HistoryEntry {
    pub fn new(description: impl Into<String>, success: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            description: description.into(),
            success,
        }
    }
}
