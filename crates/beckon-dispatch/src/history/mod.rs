//! Bounded command history stores.
//!
//! Both stores keep at most `capacity` entries, evicting the oldest first.
//! [`MemoryHistory`] is the default; [`JsonFileHistory`] persists the same
//! bounded log as a JSON array on disk.

mod json_file;
mod memory;

pub use json_file::JsonFileHistory;
pub use memory::MemoryHistory;
