use serde::{Deserialize, Serialize};

use crate::catalog::CommandId;

/// What the confidence gate decided for a single-command resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchDecision {
    /// Confidence cleared the execute threshold: dispatch once.
    Execute,
    /// Candidate shown to the caller without executing.
    Surface,
    /// Not recognized; nothing dispatched.
    Reject,
}

/// Result reported by the external command executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteOutcome {
    pub success: bool,
    pub message: String,
}

impl ExecuteOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Aggregate outcome of a sequential multi-step dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub total: usize,
    /// Sub-commands whose dispatch failed, in execution order.
    pub failed: Vec<CommandId>,
}

impl DispatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}
