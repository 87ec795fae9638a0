use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a canonical command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SystemControl,
    Applications,
    Utilities,
    Media,
    Search,
    /// Marker category for decomposed multi-step resolutions.
    Complex,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SystemControl => "system_control",
            Category::Applications => "applications",
            Category::Utilities => "utilities",
            Category::Media => "media",
            Category::Search => "search",
            Category::Complex => "complex",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of canonical command identifiers.
///
/// A tagged enum rather than string dispatch, so handler tables can be
/// checked for exhaustiveness.
/// The wire form (`open_notepad`, `show_ip`, ...) is the snake_case of the
/// variant name; `as_str`/`parse` and the serde impls all agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // System control
    Sleep,
    Shutdown,
    Restart,
    Hibernate,
    Lock,
    Unlock,
    BrightnessUp,
    BrightnessDown,
    // Applications
    OpenNotepad,
    OpenCalculator,
    OpenBrowser,
    OpenFileExplorer,
    OpenWord,
    OpenExcel,
    OpenPowerpoint,
    OpenPaint,
    OpenSettings,
    OpenControlPanel,
    OpenTaskManager,
    OpenDeviceManager,
    OpenSystemProperties,
    // Utilities
    TakeScreenshot,
    ShowIp,
    CheckBattery,
    CheckWifi,
    ShowSystemInfo,
    ShowDiskSpace,
    ShowMemoryUsage,
    ShowRunningProcesses,
    ShowNetworkStatus,
    // Media
    PlayMusic,
    PauseMusic,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    Mute,
    // Search
    SearchGoogle,
    SearchYoutube,
    SearchFiles,
    SearchDocuments,
}

impl CommandId {
    /// All canonical commands, in catalog order.
    pub const ALL: [CommandId; 41] = [
        CommandId::Sleep,
        CommandId::Shutdown,
        CommandId::Restart,
        CommandId::Hibernate,
        CommandId::Lock,
        CommandId::Unlock,
        CommandId::BrightnessUp,
        CommandId::BrightnessDown,
        CommandId::OpenNotepad,
        CommandId::OpenCalculator,
        CommandId::OpenBrowser,
        CommandId::OpenFileExplorer,
        CommandId::OpenWord,
        CommandId::OpenExcel,
        CommandId::OpenPowerpoint,
        CommandId::OpenPaint,
        CommandId::OpenSettings,
        CommandId::OpenControlPanel,
        CommandId::OpenTaskManager,
        CommandId::OpenDeviceManager,
        CommandId::OpenSystemProperties,
        CommandId::TakeScreenshot,
        CommandId::ShowIp,
        CommandId::CheckBattery,
        CommandId::CheckWifi,
        CommandId::ShowSystemInfo,
        CommandId::ShowDiskSpace,
        CommandId::ShowMemoryUsage,
        CommandId::ShowRunningProcesses,
        CommandId::ShowNetworkStatus,
        CommandId::PlayMusic,
        CommandId::PauseMusic,
        CommandId::NextTrack,
        CommandId::PreviousTrack,
        CommandId::VolumeUp,
        CommandId::VolumeDown,
        CommandId::Mute,
        CommandId::SearchGoogle,
        CommandId::SearchYoutube,
        CommandId::SearchFiles,
        CommandId::SearchDocuments,
    ];

    /// The wire identifier, e.g. `open_notepad`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Sleep => "sleep",
            CommandId::Shutdown => "shutdown",
            CommandId::Restart => "restart",
            CommandId::Hibernate => "hibernate",
            CommandId::Lock => "lock",
            CommandId::Unlock => "unlock",
            CommandId::BrightnessUp => "brightness_up",
            CommandId::BrightnessDown => "brightness_down",
            CommandId::OpenNotepad => "open_notepad",
            CommandId::OpenCalculator => "open_calculator",
            CommandId::OpenBrowser => "open_browser",
            CommandId::OpenFileExplorer => "open_file_explorer",
            CommandId::OpenWord => "open_word",
            CommandId::OpenExcel => "open_excel",
            CommandId::OpenPowerpoint => "open_powerpoint",
            CommandId::OpenPaint => "open_paint",
            CommandId::OpenSettings => "open_settings",
            CommandId::OpenControlPanel => "open_control_panel",
            CommandId::OpenTaskManager => "open_task_manager",
            CommandId::OpenDeviceManager => "open_device_manager",
            CommandId::OpenSystemProperties => "open_system_properties",
            CommandId::TakeScreenshot => "take_screenshot",
            CommandId::ShowIp => "show_ip",
            CommandId::CheckBattery => "check_battery",
            CommandId::CheckWifi => "check_wifi",
            CommandId::ShowSystemInfo => "show_system_info",
            CommandId::ShowDiskSpace => "show_disk_space",
            CommandId::ShowMemoryUsage => "show_memory_usage",
            CommandId::ShowRunningProcesses => "show_running_processes",
            CommandId::ShowNetworkStatus => "show_network_status",
            CommandId::PlayMusic => "play_music",
            CommandId::PauseMusic => "pause_music",
            CommandId::NextTrack => "next_track",
            CommandId::PreviousTrack => "previous_track",
            CommandId::VolumeUp => "volume_up",
            CommandId::VolumeDown => "volume_down",
            CommandId::Mute => "mute",
            CommandId::SearchGoogle => "search_google",
            CommandId::SearchYoutube => "search_youtube",
            CommandId::SearchFiles => "search_files",
            CommandId::SearchDocuments => "search_documents",
        }
    }

    /// The canonical spoken phrase, e.g. `open notepad`.
    pub fn phrase(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// The category this command belongs to. Total — never `Unknown`.
    pub fn category(&self) -> Category {
        use CommandId::*;
        match self {
            Sleep | Shutdown | Restart | Hibernate | Lock | Unlock | BrightnessUp
            | BrightnessDown => Category::SystemControl,
            OpenNotepad | OpenCalculator | OpenBrowser | OpenFileExplorer | OpenWord
            | OpenExcel | OpenPowerpoint | OpenPaint | OpenSettings | OpenControlPanel
            | OpenTaskManager | OpenDeviceManager | OpenSystemProperties => {
                Category::Applications
            }
            TakeScreenshot | ShowIp | CheckBattery | CheckWifi | ShowSystemInfo
            | ShowDiskSpace | ShowMemoryUsage | ShowRunningProcesses | ShowNetworkStatus => {
                Category::Utilities
            }
            PlayMusic | PauseMusic | NextTrack | PreviousTrack | VolumeUp | VolumeDown
            | Mute => Category::Media,
            SearchGoogle | SearchYoutube | SearchFiles | SearchDocuments => Category::Search,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_id_round_trips() {
        for id in CommandId::ALL {
            assert_eq!(id.as_str().parse::<CommandId>(), Ok(id));
        }
    }

    #[test]
    fn serde_uses_wire_id() {
        let json = serde_json::to_string(&CommandId::OpenNotepad).unwrap();
        assert_eq!(json, "\"open_notepad\"");
        let back: CommandId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CommandId::OpenNotepad);
    }

    #[test]
    fn every_command_has_a_category() {
        for id in CommandId::ALL {
            assert_ne!(id.category(), Category::Unknown);
            assert_ne!(id.category(), Category::Complex);
        }
    }

    #[test]
    fn media_and_device_commands_are_represented() {
        assert_eq!("play_music".parse::<CommandId>(), Ok(CommandId::PlayMusic));
        assert_eq!("next_track".parse::<CommandId>(), Ok(CommandId::NextTrack));
        assert_eq!(CommandId::BrightnessDown.category(), Category::SystemControl);
        assert_eq!(CommandId::OpenDeviceManager.category(), Category::Applications);
        assert_eq!(CommandId::ShowNetworkStatus.category(), Category::Utilities);
        assert_eq!(CommandId::SearchDocuments.phrase(), "search documents");
    }

    #[test]
    fn phrase_replaces_underscores() {
        assert_eq!(CommandId::OpenFileExplorer.phrase(), "open file explorer");
        assert_eq!(CommandId::Sleep.phrase(), "sleep");
    }
}
