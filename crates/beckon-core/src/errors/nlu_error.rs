/// Matching-pipeline and model-lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    #[error("model load failed: {name}: {reason}")]
    ModelLoadFailed { name: String, reason: String },

    #[error("encoding failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("embedding index is empty")]
    IndexEmpty,

    #[error("index has {phrases} phrases but {vectors} vectors")]
    IndexMismatch { phrases: usize, vectors: usize },

    #[error("lifecycle lock poisoned: {reason}")]
    LockPoisoned { reason: String },

    #[error("context annotation failed: {reason}")]
    AnnotationFailed { reason: String },
}
