use crate::errors::BeckonResult;
use crate::models::HistoryEntry;

/// Append/load contract for the bounded command history.
///
/// Stores keep at most their configured capacity, evicting the oldest
/// entries first. The storage format is an external concern.
pub trait IHistoryStore: Send + Sync {
    fn append(&self, entry: HistoryEntry) -> BeckonResult<()>;

    /// The most recent `limit` entries in chronological order.
    fn load(&self, limit: usize) -> BeckonResult<Vec<HistoryEntry>>;

    /// Number of retained entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
