use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching-pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NluConfig {
    /// Dimensionality of encoder output vectors.
    pub encoder_dimensions: usize,
    /// When false (the default), models are loaded on every `process` call.
    /// When true, the load is deferred until the deterministic stages miss.
    pub lazy_semantic_load: bool,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            encoder_dimensions: defaults::DEFAULT_ENCODER_DIMENSIONS,
            lazy_semantic_load: false,
        }
    }
}
