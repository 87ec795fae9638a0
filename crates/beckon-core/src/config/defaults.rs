//! Named default values for every configurable knob.

/// Seconds of inactivity before loaded models are released (rest mode).
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// How often the idle sweeper checks for timeout.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 250;

/// Confidence at or above which a resolution is executed.
/// Tuned down from 0.6 for better recall; treat as configuration.
pub const DEFAULT_EXECUTE_THRESHOLD: f64 = 0.4;

/// Confidence at or above which a candidate is surfaced without executing.
pub const DEFAULT_SURFACE_THRESHOLD: f64 = 0.2;

/// Delay between steps of a multi-step dispatch, letting OS side effects
/// (window focus) settle.
pub const DEFAULT_INTER_STEP_DELAY_MS: u64 = 500;

/// Maximum retained history entries; oldest evicted first.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Dimensionality of the fallback hashed TF-IDF encoder.
pub const DEFAULT_ENCODER_DIMENSIONS: usize = 256;
