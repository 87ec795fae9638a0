//! The interpreter front door: one call in, one [`Resolution`] out.
//!
//! Stages run cheapest-first and the first hit wins: decomposer (multi-step
//! inputs), exact table, keyword patterns, then the semantic embedding
//! fallback. Deterministic stages never depend on the models being loaded,
//! so the pipeline keeps resolving while the lifecycle manager is at rest.

use std::sync::Arc;

use beckon_core::catalog::CommandCatalog;
use beckon_core::config::{InterpreterConfig, NluConfig};
use beckon_core::constants::{EXACT_MATCH_CONFIDENCE, PATTERN_MATCH_CONFIDENCE};
use beckon_core::models::{MemoryStatus, Resolution};
use tracing::{debug, warn};

use crate::decompose::decompose;
use crate::lifecycle::{BuiltinModelFactory, IModelFactory, LifecycleManager};
use crate::matchers::{ExactMatcher, PatternMatcher};

pub struct Interpreter {
    config: NluConfig,
    exact: ExactMatcher,
    pattern: PatternMatcher,
    lifecycle: Arc<LifecycleManager>,
}

impl Interpreter {
    /// Interpreter over the built-in catalog and encoder.
    pub fn new(config: &InterpreterConfig) -> Self {
        let factory = BuiltinModelFactory::new(config.nlu.encoder_dimensions);
        Self::with_factory(config, Box::new(factory))
    }

    /// Interpreter with a caller-supplied model factory. The catalog stays
    /// built-in; only model acquisition is swapped.
    pub fn with_factory(config: &InterpreterConfig, factory: Box<dyn IModelFactory>) -> Self {
        let lifecycle = LifecycleManager::start(
            CommandCatalog::builtin(),
            factory,
            config.lifecycle.clone(),
        );
        Self {
            config: config.nlu.clone(),
            exact: ExactMatcher::new(),
            pattern: PatternMatcher::new(),
            lifecycle,
        }
    }

    /// Resolve one free-form input. Infallible: anything that goes wrong
    /// inside degrades toward `Unknown` rather than erroring out.
    pub fn process(&self, input: &str) -> Resolution {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Resolution::unknown(input);
        }

        self.lifecycle.note_usage();
        if !self.config.lazy_semantic_load {
            self.warm_models();
        }

        let lowered = trimmed.to_lowercase();

        if let Some(steps) = decompose(&lowered) {
            debug!(input = trimmed, steps = steps.len(), "decomposed");
            return Resolution::complex(input, steps);
        }

        if let Some(command) = self.exact.lookup(&lowered) {
            return Resolution::single(input, command, EXACT_MATCH_CONFIDENCE, None);
        }

        if let Some(command) = self.pattern.lookup(&lowered) {
            return Resolution::single(input, command, PATTERN_MATCH_CONFIDENCE, None);
        }

        if self.config.lazy_semantic_load {
            self.warm_models();
        }

        match self.lifecycle.semantic_resolve(&lowered) {
            Some((hit, context)) => Resolution::single(input, hit.command, hit.score, context),
            None => Resolution::unknown(input),
        }
    }

    fn warm_models(&self) {
        if let Err(e) = self.lifecycle.ensure_loaded() {
            warn!(error = %e, "semantic stage unavailable");
        }
    }

    /// Current lifecycle snapshot, for status displays.
    pub fn memory_status(&self) -> MemoryStatus {
        self.lifecycle.status()
    }

    /// Manually unload the models without waiting for the idle timeout.
    pub fn force_rest(&self) {
        self.lifecycle.force_rest();
    }
}
