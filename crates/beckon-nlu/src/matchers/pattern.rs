use beckon_core::catalog::CommandId;
use tracing::debug;

use super::tokenize;

/// Ordered keyword patterns. The first entry whose full keyword set is a
/// subset of the input's tokens wins, so multi-keyword, more-specific
/// patterns must precede generic single-keyword ones — the ordering is
/// load-bearing.
const PATTERNS: &[(&[&str], CommandId)] = &[
    // Specific multi-keyword patterns first.
    (&["open", "file", "explorer"], CommandId::OpenFileExplorer),
    (&["open", "control", "panel"], CommandId::OpenControlPanel),
    (&["open", "task", "manager"], CommandId::OpenTaskManager),
    (&["open", "device", "manager"], CommandId::OpenDeviceManager),
    (&["open", "system", "properties"], CommandId::OpenSystemProperties),
    (&["control", "panel"], CommandId::OpenControlPanel),
    (&["task", "manager"], CommandId::OpenTaskManager),
    (&["device", "manager"], CommandId::OpenDeviceManager),
    (&["system", "properties"], CommandId::OpenSystemProperties),
    (&["take", "screenshot"], CommandId::TakeScreenshot),
    (&["capture", "screen"], CommandId::TakeScreenshot),
    (&["screen", "shot"], CommandId::TakeScreenshot),
    (&["show", "ip"], CommandId::ShowIp),
    (&["ip", "address"], CommandId::ShowIp),
    (&["check", "battery"], CommandId::CheckBattery),
    (&["battery", "status"], CommandId::CheckBattery),
    (&["check", "wifi"], CommandId::CheckWifi),
    (&["wifi", "status"], CommandId::CheckWifi),
    (&["system", "info"], CommandId::ShowSystemInfo),
    (&["disk", "space"], CommandId::ShowDiskSpace),
    (&["memory", "usage"], CommandId::ShowMemoryUsage),
    (&["running", "processes"], CommandId::ShowRunningProcesses),
    (&["network", "status"], CommandId::ShowNetworkStatus),
    (&["search", "google"], CommandId::SearchGoogle),
    (&["search", "youtube"], CommandId::SearchYoutube),
    (&["search", "files"], CommandId::SearchFiles),
    (&["search", "documents"], CommandId::SearchDocuments),
    (&["lock", "computer"], CommandId::Lock),
    (&["lock", "screen"], CommandId::Lock),
    (&["sleep", "computer"], CommandId::Sleep),
    (&["shutdown", "computer"], CommandId::Shutdown),
    (&["power", "off"], CommandId::Shutdown),
    (&["turn", "off", "computer"], CommandId::Shutdown),
    (&["restart", "computer"], CommandId::Restart),
    // Brightness and media transport.
    (&["brightness", "up"], CommandId::BrightnessUp),
    (&["brightness", "down"], CommandId::BrightnessDown),
    (&["play", "music"], CommandId::PlayMusic),
    (&["pause", "music"], CommandId::PauseMusic),
    (&["next", "track"], CommandId::NextTrack),
    (&["next", "song"], CommandId::NextTrack),
    (&["previous", "track"], CommandId::PreviousTrack),
    (&["previous", "song"], CommandId::PreviousTrack),
    // Volume compounds.
    (&["volume", "up"], CommandId::VolumeUp),
    (&["volume", "increase"], CommandId::VolumeUp),
    (&["volume", "raise"], CommandId::VolumeUp),
    (&["sound", "up"], CommandId::VolumeUp),
    (&["audio", "up"], CommandId::VolumeUp),
    (&["volume", "down"], CommandId::VolumeDown),
    (&["volume", "decrease"], CommandId::VolumeDown),
    (&["volume", "lower"], CommandId::VolumeDown),
    (&["sound", "down"], CommandId::VolumeDown),
    (&["audio", "down"], CommandId::VolumeDown),
    (&["mute", "audio"], CommandId::Mute),
    // Generic single-keyword patterns last.
    (&["explorer"], CommandId::OpenFileExplorer),
    (&["notepad"], CommandId::OpenNotepad),
    (&["browser"], CommandId::OpenBrowser),
    (&["screenshot"], CommandId::TakeScreenshot),
    (&["paint"], CommandId::OpenPaint),
    (&["hibernate"], CommandId::Hibernate),
    (&["reboot"], CommandId::Restart),
    (&["mute"], CommandId::Mute),
];

/// Words that mark a volume request for the percent heuristic.
const VOLUME_WORDS: &[&str] = &["volume", "sound", "audio"];

/// Ordered multi-keyword pattern lookup over word tokens.
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn new() -> Self {
        Self
    }

    /// First pattern whose keywords are all present among the input tokens.
    pub fn lookup(&self, lowered: &str) -> Option<CommandId> {
        let tokens = tokenize(lowered);
        if tokens.is_empty() {
            return None;
        }

        for (keywords, command) in PATTERNS {
            if keywords.iter().all(|k| tokens.iter().any(|t| t == k)) {
                debug!(command = %command, keywords = ?keywords, "pattern match");
                return Some(*command);
            }
        }

        Self::volume_percent(&tokens)
    }

    /// `"set volume to 80%"` → `VolumeUp` when > 50, else `VolumeDown`.
    fn volume_percent(tokens: &[String]) -> Option<CommandId> {
        if !tokens.iter().any(|t| VOLUME_WORDS.contains(&t.as_str())) {
            return None;
        }
        let percent = tokens
            .iter()
            .find_map(|t| t.strip_suffix('%').and_then(|n| n.parse::<u32>().ok()))?;
        let command = if percent > 50 {
            CommandId::VolumeUp
        } else {
            CommandId::VolumeDown
        };
        debug!(percent, command = %command, "volume percent heuristic");
        Some(command)
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
