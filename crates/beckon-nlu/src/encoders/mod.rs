//! Encoder providers for the semantic matcher.
//!
//! A neural sentence model plugs in behind
//! [`beckon_core::traits::ITextEncoder`]; the built-in provider is a
//! deterministic hashed TF-IDF encoder that needs no model files and works
//! air-gapped.

mod hashed_tfidf;

pub use hashed_tfidf::HashedTfIdfEncoder;
