use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use beckon_core::errors::{BeckonResult, DispatchError};
use beckon_core::models::HistoryEntry;
use beckon_core::traits::IHistoryStore;
use tracing::debug;

/// File-backed bounded history: the same FIFO log as [`super::MemoryHistory`],
/// persisted as a JSON array after every append.
///
/// The whole log is rewritten on append; at a capacity of tens of entries
/// this is cheaper than any incremental format would be worth.
pub struct JsonFileHistory {
    path: PathBuf,
    capacity: usize,
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl JsonFileHistory {
    /// Open or create a history file. A missing file starts an empty log;
    /// a present one is read back in full (truncated to `capacity`).
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> BeckonResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut entries: VecDeque<HistoryEntry> = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<Vec<HistoryEntry>>(&bytes)
                .map_err(DispatchError::Serialization)?
                .into(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => VecDeque::new(),
            Err(e) => return Err(DispatchError::Io(e).into()),
        };
        while entries.len() > capacity {
            entries.pop_front();
        }
        debug!(path = %path.display(), entries = entries.len(), "history file opened");
        Ok(Self {
            path,
            capacity,
            entries: Mutex::new(entries),
        })
    }

    fn lock(&self) -> BeckonResult<std::sync::MutexGuard<'_, VecDeque<HistoryEntry>>> {
        self.entries.lock().map_err(|e| {
            DispatchError::HistoryUnavailable {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn persist(&self, entries: &VecDeque<HistoryEntry>) -> BeckonResult<()> {
        let snapshot: Vec<&HistoryEntry> = entries.iter().collect();
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(DispatchError::Serialization)?;
        fs::write(&self.path, bytes).map_err(DispatchError::Io)?;
        Ok(())
    }
}

impl IHistoryStore for JsonFileHistory {
    fn append(&self, entry: HistoryEntry) -> BeckonResult<()> {
        let mut entries = self.lock()?;
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
        self.persist(&entries)
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
