//! Shared data models: resolutions, dispatch summaries, history entries,
//! and the lifecycle/memory status surface.

mod dispatch;
mod history_entry;
mod memory_status;
mod resolution;

pub use dispatch::{DispatchDecision, DispatchSummary, ExecuteOutcome};
pub use history_entry::HistoryEntry;
pub use memory_status::{LifecycleState, MemoryStatus};
pub use resolution::{Resolution, ResolutionOutcome};
