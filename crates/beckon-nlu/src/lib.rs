//! # beckon-nlu
//!
//! The layered matching pipeline: deterministic keyword stages, multi-step
//! decomposition, semantic embedding fallback, and the lifecycle manager
//! that lazily loads and unloads the underlying models.
//!
//! Entry point: [`Interpreter::process`].

pub mod annotate;
pub mod decompose;
pub mod encoders;
pub mod interpreter;
pub mod lifecycle;
pub mod matchers;
pub mod semantic;

pub use interpreter::Interpreter;
pub use lifecycle::{IModelFactory, LifecycleManager, LoadedModels};
