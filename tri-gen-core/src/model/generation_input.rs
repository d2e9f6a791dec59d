use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::error::ConfigError;

/// Training parameters of a `TrigramModel`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
	/// Words seen this many times or fewer become `<unk>`.
	/// Negative disables folding.
	pub unk_threshold: i64,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { unk_threshold: 1 }
	}
}

/// Parameters of a generation run.
///
/// # Invariants
/// - `samples` is at least 1
/// - The same `seed` always yields the same sequence of samples for a given model
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawGenerationInput")]
pub struct GenerationInput {
	/// Number of texts to generate.
	samples: usize,

	/// Maximum number of words per text (0 gives empty texts).
	pub max_length: usize,

	/// Random seed, entropy when absent.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { samples: 3, max_length: 40, seed: None }
	}
}

/// Unvalidated form of `GenerationInput`, as read from a configuration source.
#[derive(Deserialize)]
#[serde(default)]
struct RawGenerationInput {
	samples: usize,
	max_length: usize,
	seed: Option<u64>,
}

impl Default for RawGenerationInput {
	fn default() -> Self {
		let input = GenerationInput::default();
		Self { samples: input.samples, max_length: input.max_length, seed: input.seed }
	}
}

impl TryFrom<RawGenerationInput> for GenerationInput {
	type Error = ConfigError;

	fn try_from(raw: RawGenerationInput) -> Result<Self, Self::Error> {
		Self::new(raw.samples, raw.max_length, raw.seed)
	}
}

impl GenerationInput {
	/// Creates an input with the given number of samples and length.
	///
	/// # Errors
	/// Returns an error if `samples` is 0.
	pub fn new(samples: usize, max_length: usize, seed: Option<u64>) -> Result<Self, ConfigError> {
		let mut input = Self { max_length, seed, ..Self::default() };
		input.set_samples(samples)?;
		Ok(input)
	}

	pub fn samples(&self) -> usize {
		self.samples
	}

	/// Sets the number of samples.
	///
	/// # Errors
	/// Returns an error if `samples` is 0.
	pub fn set_samples(&mut self, samples: usize) -> Result<(), ConfigError> {
		if samples == 0 {
			return Err(ConfigError::InvalidSamples);
		}
		self.samples = samples;
		Ok(())
	}

	pub fn set_max_length(&mut self, max_length: usize) {
		self.max_length = max_length;
	}

	/// Builds the random source for this run.
	pub fn make_rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;
	use serde::de::IntoDeserializer;
	use serde::de::value::{Error as DeError, MapDeserializer};

	fn from_map<'a, T, V>(entries: Vec<(&'a str, V)>) -> Result<T, DeError>
	where
		T: Deserialize<'a>,
		V: IntoDeserializer<'a, DeError>,
	{
		T::deserialize(MapDeserializer::new(entries.into_iter()))
	}

	#[test]
	fn defaults() {
		assert_eq!(ModelConfig::default().unk_threshold, 1);
		let input = GenerationInput::default();
		assert_eq!(input.samples(), 3);
		assert_eq!(input.max_length, 40);
		assert_eq!(input.seed, None);
	}

	#[test]
	fn zero_samples_rejected() {
		assert_eq!(GenerationInput::new(0, 10, None), Err(ConfigError::InvalidSamples));
		let mut input = GenerationInput::default();
		assert_eq!(input.set_samples(0), Err(ConfigError::InvalidSamples));
		assert_eq!(input.samples(), 3);
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let input = GenerationInput::new(1, 5, Some(99)).unwrap();
		let a: Vec<u32> = (0..4).map(|_| input.make_rng().random()).collect();
		assert!(a.windows(2).all(|w| w[0] == w[1]));
	}

	#[test]
	fn set_max_length_allows_zero() {
		let mut input = GenerationInput::default();
		input.set_max_length(0);
		assert_eq!(input.max_length, 0);
	}

	#[test]
	fn deserialize_fills_missing_fields_with_defaults() {
		let input: GenerationInput = from_map(vec![("max_length", 12usize)]).unwrap();
		assert_eq!(input.samples(), 3);
		assert_eq!(input.max_length, 12);
		assert_eq!(input.seed, None);

		let input: GenerationInput = from_map(vec![("samples", 5usize)]).unwrap();
		assert_eq!(input.samples(), 5);
		assert_eq!(input.max_length, 40);
	}

	#[test]
	fn deserialize_rejects_zero_samples() {
		let result: Result<GenerationInput, DeError> = from_map(vec![("samples", 0usize)]);
		let err = result.unwrap_err();
		assert!(err.to_string().contains("at least 1"));
	}

	#[test]
	fn deserialize_model_config() {
		let config: ModelConfig = from_map(vec![("unk_threshold", -2i64)]).unwrap();
		assert_eq!(config.unk_threshold, -2);

		let config: ModelConfig = from_map::<_, i64>(vec![]).unwrap();
		assert_eq!(config, ModelConfig::default());
	}
}
