use std::collections::VecDeque;
use std::sync::Mutex;

use beckon_core::errors::{BeckonResult, DispatchError};
use beckon_core::models::HistoryEntry;
use beckon_core::traits::IHistoryStore;

/// In-memory bounded history with FIFO eviction.
pub struct MemoryHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl MemoryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(64))),
            capacity,
        }
    }

    fn lock(&self) -> BeckonResult<std::sync::MutexGuard<'_, VecDeque<HistoryEntry>>> {
        self.entries.lock().map_err(|e| {
            DispatchError::HistoryUnavailable {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl IHistoryStore for MemoryHistory {
    fn append(&self, entry: HistoryEntry) -> BeckonResult<()> {
        let mut entries = self.lock()?;
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
        Ok(())
    }

    fn load(&self, limit: usize) -> BeckonResult<Vec<HistoryEntry>> {
        let entries = self.lock()?;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.iter().skip(skip).cloned().collect())
    }

    fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}
