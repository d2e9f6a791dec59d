//! Word-trigram text generation library.
//!
//! This crate provides a small statistical language model including:
//! - Corpus normalization into lower-cased word tokens
//! - Vocabulary construction with rare-word folding into `<unk>`
//! - Trigram counting over a sentinel-padded token sequence
//! - Probabilistic next-word sampling and bounded text generation
//! - Corpus loading from disk
//!
//! Training happens once through `TrigramModel::fit`; afterwards the model
//! is read-only and every `generate` call only consumes randomness.

/// Trigram model, its building blocks and generation logic.
pub mod model;

/// Corpus loading (file lookup, path helpers).
pub mod io;

/// Error types surfaced to callers.
pub mod error;

pub use error::{ConfigError, CorpusError};
pub use model::trigram_model::TrigramModel;
