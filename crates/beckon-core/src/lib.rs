//! # beckon-core
//!
//! Foundation crate for the Beckon command interpreter.
//! Defines the command catalog, types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Category, CommandCatalog, CommandId};
pub use config::InterpreterConfig;
pub use errors::{BeckonError, BeckonResult};
pub use models::{Resolution, ResolutionOutcome};
