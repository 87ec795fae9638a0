//! Command catalog: the closed taxonomy of canonical commands, their
//! categories, and the synonym table that extends the matchable vocabulary.
//!
//! Built once at startup via [`CommandCatalog::builtin`]; read-only for the
//! rest of the session.

mod command_id;
mod table;

pub use command_id::{Category, CommandId};
pub use table::CommandCatalog;
