use beckon_core::catalog::{CommandCatalog, CommandId};
use beckon_core::errors::{BeckonResult, NluError};
use beckon_core::traits::ITextEncoder;
use tracing::debug;

use super::similarity::cosine_similarity;
use super::{content_terms, SemanticMatch};

struct IndexEntry {
    phrase: String,
    command: CommandId,
    terms: Vec<String>,
}

/// Catalog phrases with their vectors and content terms.
///
/// Rebuilt as one atomic unit whenever the semantic model (re)loads and
/// never queried mid-rebuild: `build` returns a complete value, and the
/// lifecycle manager installs it under its state lock.
///
/// The nearest-neighbor scan is O(catalog size) per query — fine at tens
/// of phrases; this type is the seam behind which an approximate-NN index
/// could later be swapped without touching callers.
pub struct EmbeddingIndex {
    entries: Vec<IndexEntry>,
    vectors: Vec<Vec<f32>>,
}

impl EmbeddingIndex {
    /// Encode every catalog phrase (canonical and synonym) once.
    pub fn build(catalog: &CommandCatalog, encoder: &dyn ITextEncoder) -> BeckonResult<Self> {
        let entries: Vec<IndexEntry> = catalog
            .all_phrases()
            .map(|(phrase, id)| IndexEntry {
                phrase: phrase.to_string(),
                command: id,
                terms: content_terms(phrase),
            })
            .collect();
        if entries.is_empty() {
            return Err(NluError::IndexEmpty.into());
        }

        let texts: Vec<String> = entries.iter().map(|e| e.phrase.clone()).collect();
        let vectors = encoder.encode_batch(&texts)?;
        if vectors.len() != entries.len() {
            return Err(NluError::IndexMismatch {
                phrases: entries.len(),
                vectors: vectors.len(),
            }
            .into());
        }

        debug!(phrases = entries.len(), encoder = encoder.name(), "embedding index built");
        Ok(Self { entries, vectors })
    }

    /// Arg-max scan over every indexed phrase that shares at least one
    /// content term with the query.
    ///
    /// The cosine score is scaled by the fraction of the phrase's terms
    /// the query actually contains, so a phrase can only score high when
    /// the query covers most of its words. Queries sharing no term with
    /// any phrase return `None` rather than a hash-noise winner.
    pub fn nearest(&self, query: &str, query_vector: &[f32]) -> Option<SemanticMatch> {
        let query_terms = content_terms(query);
        let mut best: Option<(usize, f64)> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.terms.is_empty() {
                continue;
            }
            let matched = entry
                .terms
                .iter()
                .filter(|t| query_terms.contains(t))
                .count();
            if matched == 0 {
                continue;
            }
            let coverage = matched as f64 / entry.terms.len() as f64;
            let score = cosine_similarity(query_vector, &self.vectors[i]) * coverage;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }
        best.map(|(i, score)| {
            let entry = &self.entries[i];
            SemanticMatch {
                command: entry.command,
                phrase: entry.phrase.clone(),
                score,
            }
        })
    }

    /// Number of indexed phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resident size of vectors, phrase text, and term lists, in bytes.
    pub fn memory_bytes(&self) -> usize {
        let vectors: usize = self
            .vectors
            .iter()
            .map(|v| v.len() * std::mem::size_of::<f32>())
            .sum();
        let phrases: usize = self
            .entries
            .iter()
            .map(|e| e.phrase.len() + e.terms.iter().map(|t| t.len()).sum::<usize>())
            .sum();
        vectors + phrases
    }
}
