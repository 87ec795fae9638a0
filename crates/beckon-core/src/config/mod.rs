//! Interpreter configuration.
//!
//! Defaults are named constants in [`defaults`]; every struct is
//! `serde(default)` so a partial TOML file overrides only what it names.

pub mod defaults;

mod dispatch_config;
mod lifecycle_config;
mod nlu_config;

pub use dispatch_config::DispatchConfig;
pub use lifecycle_config::LifecycleConfig;
pub use nlu_config::NluConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{BeckonError, BeckonResult};

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub nlu: NluConfig,
    pub lifecycle: LifecycleConfig,
    pub dispatch: DispatchConfig,
}

impl InterpreterConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(raw: &str) -> BeckonResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| BeckonError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that violate structural invariants.
    pub fn validate(&self) -> BeckonResult<()> {
        let d = &self.dispatch;
        if !(0.0..=1.0).contains(&d.surface_threshold)
            || !(0.0..=1.0).contains(&d.execute_threshold)
        {
            return Err(BeckonError::InvalidConfig {
                reason: "confidence thresholds must be within [0, 1]".to_string(),
            });
        }
        if d.surface_threshold > d.execute_threshold {
            return Err(BeckonError::InvalidConfig {
                reason: format!(
                    "surface threshold {} exceeds execute threshold {}",
                    d.surface_threshold, d.execute_threshold
                ),
            });
        }
        if self.nlu.encoder_dimensions == 0 {
            return Err(BeckonError::InvalidConfig {
                reason: "encoder dimensions must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}
