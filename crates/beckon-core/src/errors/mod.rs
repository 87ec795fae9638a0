//! Error types for the Beckon workspace.
//!
//! One enum per subsystem, unified under [`BeckonError`].

mod dispatch_error;
mod nlu_error;

pub use dispatch_error::DispatchError;
pub use nlu_error::NluError;

/// Unified error type. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum BeckonError {
    #[error(transparent)]
    Nlu(#[from] NluError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Convenience alias used across the workspace.
pub type BeckonResult<T> = Result<T, BeckonError>;
