//! Top-level module for the trigram language model.
//!
//! Training pipeline, leaf-first:
//! - Text normalization into tokens (`preprocess`)
//! - Rare-word folding and vocabulary (`vocabulary`)
//! - Sentinel padding (`sequence`)
//! - Per-context next-word distributions (`state`)
//! - Trigram counting and the model itself (`trigram_model`)
//!
//! Generation goes through `generator`, configured by `generation_input`.

/// Lower-casing, punctuation stripping and whitespace tokenization.
pub mod preprocess;

/// Frequency counting and `<unk>` folding.
pub mod vocabulary;

/// Start/end sentinel padding of a token sequence.
pub mod sequence;

/// Ordered next-word distribution of a single context.
///
/// Tracks observed transitions in first-insertion order and samples from them.
pub mod state;

/// The trigram model: training, lookup and sampling.
pub mod trigram_model;

/// Sliding-window generation state machine.
pub mod generator;

/// Model and generation parameters (serde-enabled).
pub mod generation_input;
