/// Dispatch and history-store errors.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("executor failed for {command}: {message}")]
    ExecutorFailed { command: String, message: String },

    #[error("history store unavailable: {reason}")]
    HistoryUnavailable { reason: String },

    #[error("history i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
