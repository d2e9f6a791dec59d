use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or reading a training corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
	#[error("corpus not found at {}", path.display())]
	NotFound { path: PathBuf },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Invalid generation parameters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
	#[error("number of samples must be at least 1")]
	InvalidSamples,
}
