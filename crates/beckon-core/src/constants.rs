/// Beckon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence assigned to a whole-string exact match.
pub const EXACT_MATCH_CONFIDENCE: f64 = 0.95;

/// Confidence assigned to an ordered keyword-pattern match.
pub const PATTERN_MATCH_CONFIDENCE: f64 = 0.95;

/// Confidence assigned to a decomposed multi-step resolution.
pub const COMPLEX_CONFIDENCE: f64 = 0.9;
