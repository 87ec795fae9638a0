//! # beckon-dispatch
//!
//! The execution side of the interpreter: the confidence gate turns a
//! scored resolution into an execute / surface / reject decision, the
//! dispatcher forwards accepted commands to the external executor, and
//! every attempt is appended to a bounded command history.

pub mod dispatcher;
pub mod gate;
pub mod history;

pub use dispatcher::{DispatchReport, Dispatcher};
pub use gate::ConfidenceGate;
pub use history::{JsonFileHistory, MemoryHistory};
