//! The dispatcher: gate decision, executor hand-off, history append.

use std::thread;
use std::time::Duration;

use beckon_core::catalog::CommandId;
use beckon_core::config::DispatchConfig;
use beckon_core::errors::{BeckonResult, DispatchError};
use beckon_core::models::{
    DispatchDecision, DispatchSummary, ExecuteOutcome, HistoryEntry, Resolution,
    ResolutionOutcome,
};
use beckon_core::traits::{ICommandExecutor, IHistoryStore};
use tracing::{debug, info, warn};

use crate::gate::ConfidenceGate;

/// What came out of dispatching one resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchReport {
    /// Confidence cleared the gate and the executor ran.
    Executed(ExecuteOutcome),
    /// A candidate worth showing the caller, not confident enough to run.
    Surfaced { command: CommandId, confidence: f64 },
    /// Not recognized; nothing ran.
    Rejected,
    /// A multi-step resolution, dispatched sequentially.
    Complex(DispatchSummary),
}

pub struct Dispatcher {
    executor: Box<dyn ICommandExecutor>,
    history: Box<dyn IHistoryStore>,
    gate: ConfidenceGate,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(
        executor: Box<dyn ICommandExecutor>,
        history: Box<dyn IHistoryStore>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            executor,
            history,
            gate: ConfidenceGate::new(&config),
            config,
        }
    }

    /// Dispatch one resolution. Every attempt, executed or not, appends a
    /// history entry. Executor failures are surfaced verbatim, never
    /// retried.
    pub fn dispatch(&self, resolution: &Resolution) -> BeckonResult<DispatchReport> {
        match &resolution.outcome {
            ResolutionOutcome::Complex { sub_commands } => {
                Ok(DispatchReport::Complex(self.dispatch_complex(
                    &resolution.raw_input,
                    sub_commands,
                )))
            }
            ResolutionOutcome::Resolved { command } => {
                self.dispatch_single(resolution, *command)
            }
            ResolutionOutcome::Unknown => {
                self.record(&resolution.raw_input, "unrecognized", false);
                debug!(input = resolution.raw_input, "rejected: unknown resolution");
                Ok(DispatchReport::Rejected)
            }
        }
    }

    fn dispatch_single(
        &self,
        resolution: &Resolution,
        command: CommandId,
    ) -> BeckonResult<DispatchReport> {
        match self.gate.decide(resolution) {
            DispatchDecision::Execute => {
                info!(
                    command = %command,
                    confidence = resolution.confidence,
                    "dispatching"
                );
                match self
                    .executor
                    .execute(command, resolution.context.as_deref())
                {
                    Ok(outcome) => {
                        self.record(&resolution.raw_input, command.as_str(), outcome.success);
                        Ok(DispatchReport::Executed(outcome))
                    }
                    Err(e) => {
                        self.record(&resolution.raw_input, command.as_str(), false);
                        Err(DispatchError::ExecutorFailed {
                            command: command.as_str().to_string(),
                            message: e.to_string(),
                        }
                        .into())
                    }
                }
            }
            DispatchDecision::Surface => {
                self.record(
                    &resolution.raw_input,
                    &format!("{} (surfaced)", command.as_str()),
                    false,
                );
                debug!(
                    command = %command,
                    confidence = resolution.confidence,
                    "surfaced below execute threshold"
                );
                Ok(DispatchReport::Surfaced {
                    command,
                    confidence: resolution.confidence,
                })
            }
            DispatchDecision::Reject => {
                self.record(&resolution.raw_input, "unrecognized", false);
                debug!(
                    command = %command,
                    confidence = resolution.confidence,
                    "rejected below surface threshold"
                );
                Ok(DispatchReport::Rejected)
            }
        }
    }

    /// Sequential multi-step dispatch: every sub-command runs in order,
    /// failures do not stop the remainder, and each step gets its own
    /// history entry.
    fn dispatch_complex(&self, raw_input: &str, sub_commands: &[CommandId]) -> DispatchSummary {
        let total = sub_commands.len();
        let mut succeeded = 0;
        let mut failed = Vec::new();
        let delay = Duration::from_millis(self.config.inter_step_delay_ms);

        for (step, command) in sub_commands.iter().enumerate() {
            if step > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }
            info!(command = %command, step = step + 1, total, "dispatching step");
            let success = match self.executor.execute(*command, None) {
                Ok(outcome) => outcome.success,
                Err(e) => {
                    warn!(command = %command, error = %e, "step failed");
                    false
                }
            };
            self.record(raw_input, command.as_str(), success);
            if success {
                succeeded += 1;
            } else {
                failed.push(*command);
            }
        }

        DispatchSummary {
            succeeded,
            total,
            failed,
        }
    }

    /// History failures never block a dispatch; they are logged and dropped.
    fn record(&self, raw_input: &str, resolved: &str, success: bool) {
        let description = format!("\"{raw_input}\" -> {resolved}");
        if let Err(e) = self.history.append(HistoryEntry::new(description, success)) {
            warn!(error = %e, "history append failed");
        }
    }

    /// The most recent `limit` history entries, oldest first.
    pub fn history(&self, limit: usize) -> BeckonResult<Vec<HistoryEntry>> {
        self.history.load(limit)
    }
}
