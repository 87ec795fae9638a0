//! Confidence gate: maps a resolution's score onto a dispatch decision.

use beckon_core::config::DispatchConfig;
use beckon_core::models::{DispatchDecision, Resolution, ResolutionOutcome};

/// Threshold-based gate. `Complex` resolutions bypass it entirely; the
/// decomposer only emits sub-commands it resolved deterministically.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceGate {
    execute_threshold: f64,
    surface_threshold: f64,
}

impl ConfidenceGate {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            execute_threshold: config.execute_threshold,
            surface_threshold: config.surface_threshold,
        }
    }

    /// Decision for a single-command resolution.
    ///
    /// `Unknown` is always rejected regardless of thresholds.
    pub fn decide(&self, resolution: &Resolution) -> DispatchDecision {
        match resolution.outcome {
            ResolutionOutcome::Unknown => DispatchDecision::Reject,
            _ if resolution.confidence >= self.execute_threshold => DispatchDecision::Execute,
            _ if resolution.confidence >= self.surface_threshold => DispatchDecision::Surface,
            _ => DispatchDecision::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beckon_core::catalog::CommandId;

    fn gate() -> ConfidenceGate {
        ConfidenceGate::new(&DispatchConfig::default())
    }

    fn resolution(confidence: f64) -> Resolution {
        Resolution::single("test", CommandId::OpenNotepad, confidence, None)
    }

    #[test]
    fn high_confidence_executes() {
        assert_eq!(gate().decide(&resolution(0.95)), DispatchDecision::Execute);
        assert_eq!(gate().decide(&resolution(0.4)), DispatchDecision::Execute);
    }

    #[test]
    fn mid_confidence_surfaces() {
        assert_eq!(gate().decide(&resolution(0.39)), DispatchDecision::Surface);
        assert_eq!(gate().decide(&resolution(0.2)), DispatchDecision::Surface);
    }

    #[test]
    fn low_confidence_rejects() {
        assert_eq!(gate().decide(&resolution(0.19)), DispatchDecision::Reject);
        assert_eq!(gate().decide(&resolution(0.0)), DispatchDecision::Reject);
    }

    #[test]
    fn unknown_rejects_at_any_confidence() {
        let r = Resolution::unknown("gibberish");
        assert_eq!(gate().decide(&r), DispatchDecision::Reject);
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let config = DispatchConfig {
            execute_threshold: 0.8,
            surface_threshold: 0.5,
            ..DispatchConfig::default()
        };
        let gate = ConfidenceGate::new(&config);
        assert_eq!(gate.decide(&resolution(0.7)), DispatchDecision::Surface);
        assert_eq!(gate.decide(&resolution(0.4)), DispatchDecision::Reject);
    }
}
