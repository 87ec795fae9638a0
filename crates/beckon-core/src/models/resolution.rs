use serde::{Deserialize, Serialize};

use crate::catalog::{Category, CommandId};
use crate::constants;

/// What an input resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolutionOutcome {
    /// One canonical command.
    Resolved { command: CommandId },
    /// Two or more conjoined commands, in execution order.
    /// Bypasses confidence gating.
    Complex { sub_commands: Vec<CommandId> },
    /// Nothing matched.
    Unknown,
}

/// The scored result of interpreting one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The input exactly as the caller supplied it.
    pub raw_input: String,
    pub outcome: ResolutionOutcome,
    /// Match quality in [0, 1].
    pub confidence: f64,
    pub category: Category,
    /// Optional free-text enrichment for display only.
    pub context: Option<String>,
}

impl Resolution {
    /// A single-command resolution. Confidence is clamped into [0, 1];
    /// the semantic stage can produce small negative similarities.
    pub fn single(
        raw_input: &str,
        command: CommandId,
        confidence: f64,
        context: Option<String>,
    ) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            category: command.category(),
            outcome: ResolutionOutcome::Resolved { command },
            confidence: confidence.clamp(0.0, 1.0),
            context,
        }
    }

    /// A multi-step resolution from the decomposer.
    pub fn complex(raw_input: &str, sub_commands: Vec<CommandId>) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            outcome: ResolutionOutcome::Complex { sub_commands },
            confidence: constants::COMPLEX_CONFIDENCE,
            category: Category::Complex,
            context: None,
        }
    }

    /// The well-formed "nothing matched" resolution.
    pub fn unknown(raw_input: &str) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            outcome: ResolutionOutcome::Unknown,
            confidence: 0.0,
            category: Category::Unknown,
            context: None,
        }
    }

    /// The resolved command, if this is a single-command resolution.
    pub fn command(&self) -> Option<CommandId> {
        match &self.outcome {
            ResolutionOutcome::Resolved { command } => Some(*command),
            _ => None,
        }
    }

    /// The sub-commands, if this is a complex resolution.
    pub fn sub_commands(&self) -> Option<&[CommandId]> {
        match &self.outcome {
            ResolutionOutcome::Complex { sub_commands } => Some(sub_commands),
            _ => None,
        }
    }
}
