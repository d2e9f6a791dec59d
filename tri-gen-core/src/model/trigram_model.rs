use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;

use super::generation_input::ModelConfig;
use super::generator::Generator;
use super::preprocess::normalize;
use super::sequence::pad_sequence;
use super::state::State;
use super::vocabulary::{build_vocabulary, Vocabulary};

/// Default number of generated tokens for `generate_default`.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Two consecutive tokens `(w1, w2)` used as a lookup key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context(String, String);

impl Context {
	pub fn new(w1: &str, w2: &str) -> Self {
		Self(w1.to_owned(), w2.to_owned())
	}

	pub fn w1(&self) -> &str {
		&self.0
	}

	pub fn w2(&self) -> &str {
		&self.1
	}
}

/// Word-level trigram language model.
///
/// The model learns, for every pair of consecutive tokens, how often each
/// word follows it, then generates text by sampling from those counts.
///
/// # Responsibilities
/// - Train from raw text (normalize, fold rare words, pad, count)
/// - Sample the next word of a given context
/// - Generate bounded text starting from the start sentinels
///
/// # Invariants
/// - Untrained: no vocabulary, no states
/// - Trained: at least one state; every state total equals the sum of its counts
/// - Tables are never modified between two `fit` calls
#[derive(Clone, Debug)]
pub struct TrigramModel {
	/// Frequency at or below which a word becomes `<unk>`.
	unk_threshold: i64,

	/// Kept words, `None` until trained.
	vocabulary: Option<Vocabulary>,

	/// Mapping from a context to its next-word distribution.
	states: HashMap<Context, State>,

	trained: bool,
}

impl TrigramModel {
	/// Creates an untrained model.
	///
	/// A negative `unk_threshold` disables rare-word folding.
	pub fn new(unk_threshold: i64) -> Self {
		Self {
			unk_threshold,
			vocabulary: None,
			states: HashMap::new(),
			trained: false,
		}
	}

	/// Creates an untrained model from a configuration.
	pub fn from_config(config: &ModelConfig) -> Self {
		Self::new(config.unk_threshold)
	}

	/// Trains the model on raw text.
	///
	/// Steps:
	/// 1. Normalize text into tokens.
	/// 2. Build the vocabulary and replace rare tokens with `<unk>`.
	/// 3. Add start and end sentinels.
	/// 4. Count trigrams per context.
	///
	/// # Notes
	/// - The whole text is treated as one long sequence.
	/// - Training replaces any previous tables. It is all-or-nothing: a text
	///   without tokens leaves the model untrained.
	pub fn fit(&mut self, raw: &str) {
		let tokens = normalize(raw);
		if tokens.is_empty() {
			info!("corpus has no tokens, model left untrained");
			self.reset();
			return;
		}

		let (vocabulary, cleaned) = build_vocabulary(&tokens, self.unk_threshold);
		let padded = pad_sequence(cleaned);
		let states = count_trigrams(&padded);
		if states.is_empty() {
			info!("corpus produced no trigram, model left untrained");
			self.reset();
			return;
		}

		debug!(
			"trained on {} tokens: {} vocabulary words, {} contexts",
			tokens.len(),
			vocabulary.len(),
			states.len()
		);
		self.vocabulary = Some(vocabulary);
		self.states = states;
		self.trained = true;
	}

	fn reset(&mut self) {
		self.vocabulary = None;
		self.states.clear();
		self.trained = false;
	}

	/// Samples the word following `(w1, w2)`.
	///
	/// Draws exactly one uniform value from `rng` when the context is known.
	/// Returns `None` without drawing if the context was never observed;
	/// there is no backoff to shorter contexts.
	pub fn sample_next<R: Rng>(&self, w1: &str, w2: &str, rng: &mut R) -> Option<&str> {
		let state = self.state(w1, w2)?;
		if state.total() == 0 {
			return None;
		}
		let r: f64 = rng.random();
		state.sample(r)
	}

	/// Generates up to `max_length` words joined by single spaces.
	///
	/// Starts from the start sentinels and stops on an unseen context, on the
	/// end sentinel, or after `max_length` words. Returns an empty string if
	/// the model is untrained.
	pub fn generate<R: Rng>(&self, max_length: usize, rng: &mut R) -> String {
		if !self.trained {
			return String::new();
		}
		Generator::new(self, rng, max_length).collect::<Vec<_>>().join(" ")
	}

	/// Generates up to `DEFAULT_MAX_LENGTH` words using the thread-local rng.
	pub fn generate_default(&self) -> String {
		self.generate(DEFAULT_MAX_LENGTH, &mut rand::rng())
	}

	pub fn is_trained(&self) -> bool {
		self.trained
	}

	pub fn unk_threshold(&self) -> i64 {
		self.unk_threshold
	}

	/// Vocabulary of the last successful training, `None` if untrained.
	pub fn vocabulary(&self) -> Option<&Vocabulary> {
		self.vocabulary.as_ref()
	}

	/// Next-word distribution of `(w1, w2)`, if observed.
	pub fn state(&self, w1: &str, w2: &str) -> Option<&State> {
		self.states.get(&Context::new(w1, w2))
	}

	/// Number of observations of `(w1, w2)`, if observed.
	pub fn context_total(&self, w1: &str, w2: &str) -> Option<usize> {
		self.state(w1, w2).map(State::total)
	}

	/// All observed contexts with their distributions (arbitrary order).
	pub fn contexts(&self) -> impl Iterator<Item = (&Context, &State)> {
		self.states.iter()
	}

	pub fn context_count(&self) -> usize {
		self.states.len()
	}
}

/// Counts every trigram of a padded sequence.
///
/// For each window `(w1, w2, w3)` the transition `w3` is recorded in the
/// state of `(w1, w2)`. Sequences shorter than 3 tokens give an empty table.
pub fn count_trigrams(padded: &[String]) -> HashMap<Context, State> {
	let mut states: HashMap<Context, State> = HashMap::new();
	for window in padded.windows(3) {
		let context = Context::new(&window[0], &window[1]);
		match states.get_mut(&context) {
			Some(state) => state.add_transition(&window[2]),
			None => {
				let mut state = State::new();
				state.add_transition(&window[2]);
				states.insert(context, state);
			}
		}
	}
	states
}
