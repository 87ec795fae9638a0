use crate::errors::BeckonResult;

/// Text-to-vector encoder used by the semantic matcher.
pub trait ITextEncoder: Send + Sync {
    /// Encode a single text into a fixed-dimension vector.
    fn encode(&self, text: &str) -> BeckonResult<Vec<f32>>;

    /// Encode a batch of texts.
    fn encode_batch(&self, texts: &[String]) -> BeckonResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Human-readable encoder name.
    fn name(&self) -> &str;

    /// Approximate resident size of the encoder's own tables, in bytes.
    fn memory_bytes(&self) -> usize;
}
