use std::collections::HashMap;

use super::{Category, CommandId};

/// Synonym table: alternate phrasings mapped to their owning command.
///
/// Kept as a static slice so the catalog stays allocation-light and the
/// vocabulary is reviewable in one place.
const SYNONYMS: &[(&str, CommandId)] = &[
    ("notepad", CommandId::OpenNotepad),
    ("text editor", CommandId::OpenNotepad),
    ("write a note", CommandId::OpenNotepad),
    ("calculator", CommandId::OpenCalculator),
    ("calc", CommandId::OpenCalculator),
    ("do some math", CommandId::OpenCalculator),
    ("browser", CommandId::OpenBrowser),
    ("internet", CommandId::OpenBrowser),
    ("web", CommandId::OpenBrowser),
    ("chrome", CommandId::OpenBrowser),
    ("edge", CommandId::OpenBrowser),
    ("firefox", CommandId::OpenBrowser),
    ("file explorer", CommandId::OpenFileExplorer),
    ("explorer", CommandId::OpenFileExplorer),
    ("my files", CommandId::OpenFileExplorer),
    ("folders", CommandId::OpenFileExplorer),
    ("microsoft word", CommandId::OpenWord),
    ("word document", CommandId::OpenWord),
    ("microsoft excel", CommandId::OpenExcel),
    ("spreadsheet", CommandId::OpenExcel),
    ("presentation", CommandId::OpenPowerpoint),
    ("slides", CommandId::OpenPowerpoint),
    ("ppt", CommandId::OpenPowerpoint),
    ("paint", CommandId::OpenPaint),
    ("drawing app", CommandId::OpenPaint),
    ("settings", CommandId::OpenSettings),
    ("windows settings", CommandId::OpenSettings),
    ("preferences", CommandId::OpenSettings),
    ("control panel", CommandId::OpenControlPanel),
    ("task manager", CommandId::OpenTaskManager),
    ("running programs", CommandId::OpenTaskManager),
    ("device manager", CommandId::OpenDeviceManager),
    ("system properties", CommandId::OpenSystemProperties),
    ("screenshot", CommandId::TakeScreenshot),
    ("capture screen", CommandId::TakeScreenshot),
    ("screen shot", CommandId::TakeScreenshot),
    ("ip address", CommandId::ShowIp),
    ("network ip", CommandId::ShowIp),
    ("internet address", CommandId::ShowIp),
    ("battery", CommandId::CheckBattery),
    ("battery status", CommandId::CheckBattery),
    ("power status", CommandId::CheckBattery),
    ("wifi", CommandId::CheckWifi),
    ("wireless", CommandId::CheckWifi),
    ("internet connection", CommandId::CheckWifi),
    ("lock computer", CommandId::Lock),
    ("lock screen", CommandId::Lock),
    ("lock workstation", CommandId::Lock),
    ("unlock computer", CommandId::Unlock),
    ("unlock screen", CommandId::Unlock),
    ("sleep mode", CommandId::Sleep),
    ("suspend", CommandId::Sleep),
    ("turn off", CommandId::Shutdown),
    ("power off", CommandId::Shutdown),
    ("shutdown computer", CommandId::Shutdown),
    ("reboot", CommandId::Restart),
    ("restart system", CommandId::Restart),
    ("brighter", CommandId::BrightnessUp),
    ("dimmer", CommandId::BrightnessDown),
    ("dim the screen", CommandId::BrightnessDown),
    ("music", CommandId::PlayMusic),
    ("resume music", CommandId::PlayMusic),
    ("stop music", CommandId::PauseMusic),
    ("skip track", CommandId::NextTrack),
    ("skip song", CommandId::NextTrack),
    ("last track", CommandId::PreviousTrack),
    ("louder", CommandId::VolumeUp),
    ("turn it up", CommandId::VolumeUp),
    ("quieter", CommandId::VolumeDown),
    ("turn it down", CommandId::VolumeDown),
    ("silence", CommandId::Mute),
    ("google it", CommandId::SearchGoogle),
    ("youtube", CommandId::SearchYoutube),
    ("find files", CommandId::SearchFiles),
    ("find documents", CommandId::SearchDocuments),
    ("processes", CommandId::ShowRunningProcesses),
    ("network status", CommandId::ShowNetworkStatus),
];

/// The static command catalog: canonical commands grouped by category plus
/// the synonym table. Immutable for the session.
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    /// Canonical phrase → command (commands map to themselves).
    canonical: Vec<(String, CommandId)>,
    /// Synonym phrase → owning command.
    synonyms: Vec<(String, CommandId)>,
    /// Fast phrase → owner lookup over both tables.
    owners: HashMap<String, CommandId>,
}

impl CommandCatalog {
    /// Build the built-in catalog. Called once at startup.
    pub fn builtin() -> Self {
        let canonical: Vec<(String, CommandId)> = CommandId::ALL
            .iter()
            .map(|id| (id.phrase(), *id))
            .collect();
        let synonyms: Vec<(String, CommandId)> = SYNONYMS
            .iter()
            .map(|(phrase, id)| (phrase.to_string(), *id))
            .collect();

        let mut owners = HashMap::with_capacity(canonical.len() + synonyms.len());
        for (phrase, id) in canonical.iter().chain(synonyms.iter()) {
            owners.insert(phrase.clone(), *id);
        }

        Self {
            canonical,
            synonyms,
            owners,
        }
    }

    /// Every matchable phrase paired with its owning canonical command:
    /// canonical phrases first (owner = self), then synonyms.
    pub fn all_phrases(&self) -> impl Iterator<Item = (&str, CommandId)> {
        self.canonical
            .iter()
            .chain(self.synonyms.iter())
            .map(|(phrase, id)| (phrase.as_str(), *id))
    }

    /// The owning command of a phrase, if it is in the vocabulary.
    pub fn owner_of(&self, phrase: &str) -> Option<CommandId> {
        self.owners.get(phrase).copied()
    }

    /// Category of a command by wire id; `Unknown` for ids outside the
    /// catalog.
    pub fn category_of(&self, id: &str) -> Category {
        id.parse::<CommandId>()
            .map(|c| c.category())
            .unwrap_or(Category::Unknown)
    }

    /// Number of matchable phrases (canonical + synonyms).
    pub fn len(&self) -> usize {
        self.canonical.len() + self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty() && self.synonyms.is_empty()
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
