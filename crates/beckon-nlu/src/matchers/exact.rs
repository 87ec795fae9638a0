use std::collections::HashMap;

use beckon_core::catalog::CommandId;
use tracing::debug;

/// Short single-word inputs that resolve immediately, checked before the
/// canonical phrases. Highest-priority table in the whole pipeline.
const PRIORITY: &[(&str, CommandId)] = &[
    ("ip", CommandId::ShowIp),
    ("battery", CommandId::CheckBattery),
    ("wifi", CommandId::CheckWifi),
    ("screenshot", CommandId::TakeScreenshot),
    ("notepad", CommandId::OpenNotepad),
    ("calculator", CommandId::OpenCalculator),
    ("calc", CommandId::OpenCalculator),
    ("browser", CommandId::OpenBrowser),
    ("explorer", CommandId::OpenFileExplorer),
    ("settings", CommandId::OpenSettings),
    ("word", CommandId::OpenWord),
    ("excel", CommandId::OpenExcel),
    ("powerpoint", CommandId::OpenPowerpoint),
    ("paint", CommandId::OpenPaint),
    ("volume", CommandId::VolumeUp),
    ("reboot", CommandId::Restart),
];

/// Whole-string lookup against canonical phrases and the priority table.
/// Never requires a loaded model.
pub struct ExactMatcher {
    table: HashMap<String, CommandId>,
}

impl ExactMatcher {
    /// Every canonical phrase maps to its command, overlaid with the short
    /// priority entries.
    pub fn new() -> Self {
        let mut table: HashMap<String, CommandId> = CommandId::ALL
            .iter()
            .map(|id| (id.phrase(), *id))
            .collect();
        for (word, id) in PRIORITY {
            table.insert((*word).to_string(), *id);
        }
        Self { table }
    }

    /// Match the lowercased, trimmed input as a whole string.
    pub fn lookup(&self, lowered: &str) -> Option<CommandId> {
        let hit = self.table.get(lowered.trim()).copied();
        if let Some(id) = hit {
            debug!(command = %id, "exact match");
        }
        hit
    }
}

impl Default for ExactMatcher {
    fn default() -> Self {
        Self::new()
    }
}
