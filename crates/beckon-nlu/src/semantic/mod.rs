//! Semantic embedding fallback: catalog phrases and the query are encoded
//! into vectors, the nearest phrase by cosine similarity wins, and the
//! winning phrase maps back to its owning canonical command.
//!
//! Scores are gated on lexical term overlap: a phrase that shares no
//! content term with the query never receives a score, so encoder hash
//! noise cannot push an unrelated phrase past the dispatch thresholds.

mod index;
mod similarity;

pub use index::EmbeddingIndex;
pub use similarity::cosine_similarity;

use beckon_core::catalog::CommandId;

/// Content terms of a text: lowercase alphanumeric runs of two or more
/// characters. One tokenization shared by the encoder and the overlap
/// gate, so the two always agree on what counts as a term.
pub(crate) fn content_terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.len() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

/// The winner of a nearest-phrase scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticMatch {
    /// The owning canonical command (never the synonym itself).
    pub command: CommandId,
    /// The catalog phrase that won the scan.
    pub phrase: String,
    /// Cosine similarity scaled by the phrase's matched-term fraction.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_terms_drop_single_letters_and_punctuation() {
        assert_eq!(content_terms("Open a file, please!"), ["open", "file", "please"]);
    }

    #[test]
    fn content_terms_of_noise_are_empty() {
        assert!(content_terms("a ? !").is_empty());
    }
}
