use std::collections::HashMap;

use beckon_core::errors::BeckonResult;
use beckon_core::traits::ITextEncoder;

use crate::semantic::content_terms;

/// Buckets each term is spread across. Spreading a term over several
/// signed buckets keeps a single cross-term bucket collision from
/// dominating the dot product between unrelated texts.
const HASHES_PER_TERM: usize = 4;

/// Signed feature-hashing encoder.
///
/// Produces deterministic dense vectors by spreading each term over
/// `HASHES_PER_TERM` signed buckets, with weights favoring repeated and
/// longer terms. Not as semantically rich as a neural encoder, but
/// always available and needs no vocabulary on disk.
pub struct HashedTfIdfEncoder {
    dimensions: usize,
}

impl HashedTfIdfEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a over the term bytes, seeded per hash slot so the same term
    /// lands in `HASHES_PER_TERM` independent buckets.
    fn spread_hash(term: &str, slot: u64) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325 ^ slot.wrapping_mul(0x9e3779b97f4a7c15);
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    /// Build a weighted, L2-normalized vector for the given text.
    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = content_terms(text);
        if terms.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            // Sub-linear term frequency, with longer terms carrying more
            // signal than short stopword-like ones.
            let weight = (*count as f32).sqrt() * (1.0 + (term.len() as f32).ln());
            let share = weight / HASHES_PER_TERM as f32;
            for slot in 0..HASHES_PER_TERM as u64 {
                let h = Self::spread_hash(term, slot);
                let bucket = ((h >> 1) as usize) % self.dimensions;
                let sign = if h & 1 == 0 { 1.0 } else { -1.0 };
                vec[bucket] += sign * share;
            }
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl ITextEncoder for HashedTfIdfEncoder {
    fn encode(&self, text: &str) -> BeckonResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn encode_batch(&self, texts: &[String]) -> BeckonResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }

    fn memory_bytes(&self) -> usize {
        // Stateless — no vocabulary tables are kept resident.
        std::mem::size_of::<Self>()
    }
}
