//! Model lifecycle: lazy construction, usage tracking, idle unloading.
//!
//! State machine: `Unloaded --ensure_loaded(ok)--> Loaded --(idle timeout |
//! force_rest)--> Unloaded`, with `Loading` as the transient single-flight
//! sub-state between them. `Loaded` self-loops on each query (timer reset).

mod manager;

pub use manager::{BuiltinModelFactory, IModelFactory, LifecycleManager, LoadedModels};
