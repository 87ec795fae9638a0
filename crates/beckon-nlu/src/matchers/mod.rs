//! Deterministic matchers: the model-free fast path.
//!
//! [`ExactMatcher`] is checked first (whole-string equality), then
//! [`PatternMatcher`] (ordered keyword subsets). Both operate on the
//! lowercased input and complete in microseconds.

mod exact;
mod pattern;

pub use exact::ExactMatcher;
pub use pattern::PatternMatcher;

/// Lowercase word tokens, split on non-alphanumeric boundaries.
/// `%`-suffixed number tokens (volume percentages) survive as `"80%"`.
pub(crate) fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric() && c != '%')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}
