use crate::catalog::CommandId;
use crate::errors::BeckonResult;

/// Optional secondary model that attaches a short free-text context string
/// to a semantic resolution, purely for display.
///
/// Failures here are swallowed by the caller: resolution and confidence are
/// never affected by this trait.
pub trait IContextAnnotator: Send + Sync {
    fn annotate(&self, input: &str, resolved: CommandId) -> BeckonResult<String>;

    fn name(&self) -> &str;
}
