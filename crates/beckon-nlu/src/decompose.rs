//! Complex command decomposer.
//!
//! Splits one input expressing several conjoined requests ("open notepad
//! and take a screenshot") on connector words, resolves each segment with
//! cheap fragment patterns, and returns the commands in segment order.
//! Everything here is model-free.

use beckon_core::catalog::CommandId;
use tracing::debug;

use crate::matchers::tokenize;

/// Connector words that mark a multi-step request, matched on word
/// boundaries, case-insensitive.
const CONNECTORS: &[&str] = &["and", "also", "then", "next", "after", "while"];

/// Fragment patterns tuned for segment extraction: every keyword must be a
/// token of the segment. Ordered — specific entries precede generic ones.
const FRAGMENT_PATTERNS: &[(&[&str], CommandId)] = &[
    (&["open", "file", "explorer"], CommandId::OpenFileExplorer),
    (&["open", "control", "panel"], CommandId::OpenControlPanel),
    (&["open", "task", "manager"], CommandId::OpenTaskManager),
    (&["open", "notepad"], CommandId::OpenNotepad),
    (&["open", "calculator"], CommandId::OpenCalculator),
    (&["open", "calc"], CommandId::OpenCalculator),
    (&["open", "browser"], CommandId::OpenBrowser),
    (&["open", "explorer"], CommandId::OpenFileExplorer),
    (&["open", "files"], CommandId::OpenFileExplorer),
    (&["open", "folders"], CommandId::OpenFileExplorer),
    (&["open", "settings"], CommandId::OpenSettings),
    (&["take", "screenshot"], CommandId::TakeScreenshot),
    (&["capture", "screen"], CommandId::TakeScreenshot),
    (&["show", "ip"], CommandId::ShowIp),
    (&["check", "battery"], CommandId::CheckBattery),
    (&["check", "wifi"], CommandId::CheckWifi),
    (&["lock", "computer"], CommandId::Lock),
    (&["sleep", "computer"], CommandId::Sleep),
    (&["shutdown", "computer"], CommandId::Shutdown),
    (&["restart", "computer"], CommandId::Restart),
    (&["play", "music"], CommandId::PlayMusic),
    (&["pause", "music"], CommandId::PauseMusic),
    (&["next", "track"], CommandId::NextTrack),
    (&["previous", "track"], CommandId::PreviousTrack),
    (&["brightness", "up"], CommandId::BrightnessUp),
    (&["brightness", "down"], CommandId::BrightnessDown),
];

/// Direct single-term fallback for segments no fragment pattern covers.
const DIRECT_TERMS: &[(&str, CommandId)] = &[
    ("calculator", CommandId::OpenCalculator),
    ("calc", CommandId::OpenCalculator),
    ("explorer", CommandId::OpenFileExplorer),
    ("files", CommandId::OpenFileExplorer),
    ("folders", CommandId::OpenFileExplorer),
    ("notepad", CommandId::OpenNotepad),
    ("browser", CommandId::OpenBrowser),
    ("settings", CommandId::OpenSettings),
    ("screenshot", CommandId::TakeScreenshot),
    ("ip", CommandId::ShowIp),
    ("battery", CommandId::CheckBattery),
    ("wifi", CommandId::CheckWifi),
    ("lock", CommandId::Lock),
    ("sleep", CommandId::Sleep),
    ("shutdown", CommandId::Shutdown),
    ("restart", CommandId::Restart),
    ("reboot", CommandId::Restart),
    ("mute", CommandId::Mute),
    ("music", CommandId::PlayMusic),
];

/// Decompose a lowercased input into its sub-commands.
///
/// Returns `None` when the input carries no connector words, or when the
/// segments yield no commands at all — the caller then falls back to the
/// single-command pipeline on the original text, so an empty complex
/// result is never produced.
pub fn decompose(lowered: &str) -> Option<Vec<CommandId>> {
    let tokens = tokenize(lowered);
    if !tokens.iter().any(|t| CONNECTORS.contains(&t.as_str())) {
        return None;
    }

    let segments = split_segments(&tokens);
    debug!(?segments, "decomposing complex input");

    let mut commands: Vec<CommandId> = Vec::new();
    for segment in &segments {
        for command in resolve_segment(segment) {
            // Dedup preserving first-seen order.
            if !commands.contains(&command) {
                commands.push(command);
            }
        }
    }

    if commands.is_empty() {
        debug!("connectors present but no sub-commands extracted");
        None
    } else {
        Some(commands)
    }
}

/// Split the token stream on connector occurrences into ordered, non-empty
/// segments.
fn split_segments(tokens: &[String]) -> Vec<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if CONNECTORS.contains(&token.as_str()) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token.clone());
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Resolve one segment: fragment patterns first, direct term lookup only
/// when no pattern matched.
fn resolve_segment(segment: &[String]) -> Vec<CommandId> {
    let mut found = Vec::new();
    for (keywords, command) in FRAGMENT_PATTERNS {
        if keywords.iter().all(|k| segment.iter().any(|t| t == k)) && !found.contains(command) {
            found.push(*command);
        }
    }
    if found.is_empty() {
        for (term, command) in DIRECT_TERMS {
            if segment.iter().any(|t| t == term) {
                found.push(*command);
                break;
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_connectors_is_not_complex() {
        assert_eq!(decompose("open notepad"), None);
    }

    #[test]
    fn splits_on_and() {
        assert_eq!(
            decompose("open notepad and take a screenshot"),
            Some(vec![CommandId::OpenNotepad, CommandId::TakeScreenshot])
        );
    }

    #[test]
    fn then_preserves_segment_order() {
        assert_eq!(
            decompose("take screenshot then show ip"),
            Some(vec![CommandId::TakeScreenshot, CommandId::ShowIp])
        );
    }

    #[test]
    fn three_steps() {
        assert_eq!(
            decompose("open calculator and check battery then lock computer"),
            Some(vec![
                CommandId::OpenCalculator,
                CommandId::CheckBattery,
                CommandId::Lock
            ])
        );
    }

    #[test]
    fn duplicate_commands_deduplicated() {
        assert_eq!(
            decompose("open notepad and open notepad"),
            Some(vec![CommandId::OpenNotepad])
        );
    }

    #[test]
    fn direct_term_fallback_when_no_fragment_pattern() {
        // "the calc" has no open-verb, so the direct term lookup kicks in.
        assert_eq!(
            decompose("the calc and the wifi"),
            Some(vec![CommandId::OpenCalculator, CommandId::CheckWifi])
        );
    }

    #[test]
    fn media_steps_decompose() {
        assert_eq!(
            decompose("play music and take a screenshot"),
            Some(vec![CommandId::PlayMusic, CommandId::TakeScreenshot])
        );
    }

    #[test]
    fn connectors_without_commands_is_not_complex() {
        assert_eq!(decompose("salt and pepper"), None);
    }

    #[test]
    fn connector_needs_word_boundary() {
        // "sandwich" contains "and" as a substring but not as a word.
        assert_eq!(decompose("notepad sandwich"), None);
    }

    #[test]
    fn mixed_case_handled_by_lowercased_input() {
        assert_eq!(
            decompose("open notepad AND take a screenshot".to_lowercase().as_str()),
            Some(vec![CommandId::OpenNotepad, CommandId::TakeScreenshot])
        );
    }
}
