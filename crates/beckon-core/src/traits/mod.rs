//! Traits at the seams of the interpreter: text encoding, context
//! annotation, command execution, and history persistence.

mod annotator;
mod encoder;
mod executor;
mod history;

pub use annotator::IContextAnnotator;
pub use encoder::ITextEncoder;
pub use executor::ICommandExecutor;
pub use history::IHistoryStore;
