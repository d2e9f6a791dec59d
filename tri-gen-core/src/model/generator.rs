use std::iter::FusedIterator;

use log::trace;
use rand::Rng;

use super::sequence::{END_TOKEN, START_TOKENS};
use super::trigram_model::TrigramModel;

/// Word-by-word generation over a trained `TrigramModel`.
///
/// The generator keeps a sliding window `(w1, w2)`, initialized to the start
/// sentinels, and yields one sampled word per step. After each word the
/// window advances: `(w1, w2) -> (w2, word)`.
///
/// Generation stops, and the iterator stays exhausted, when:
/// - the current context was never observed
/// - the end sentinel is sampled (it is not yielded)
/// - `max_length` words were yielded
///
/// An untrained model yields nothing.
pub struct Generator<'m, 'r, R: Rng> {
	model: &'m TrigramModel,
	rng: &'r mut R,
	w1: &'m str,
	w2: &'m str,
	emitted: usize,
	max_length: usize,
	done: bool,
}

impl<'m, 'r, R: Rng> Generator<'m, 'r, R> {
	pub fn new(model: &'m TrigramModel, rng: &'r mut R, max_length: usize) -> Self {
		Self {
			model,
			rng,
			w1: START_TOKENS[0],
			w2: START_TOKENS[1],
			emitted: 0,
			max_length,
			done: !model.is_trained(),
		}
	}

	/// Number of words yielded so far.
	pub fn emitted(&self) -> usize {
		self.emitted
	}
}

impl<'m, 'r, R: Rng> Iterator for Generator<'m, 'r, R> {
	type Item = &'m str;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.emitted >= self.max_length {
			self.done = true;
			return None;
		}

		let model: &'m TrigramModel = self.model;
		match model.sample_next(self.w1, self.w2, &mut *self.rng) {
			None => {
				trace!("unseen context ({}, {}), stopping", self.w1, self.w2);
				self.done = true;
				None
			}
			Some(word) if word == END_TOKEN => {
				self.done = true;
				None
			}
			Some(word) => {
				self.emitted += 1;
				self.w1 = self.w2;
				self.w2 = word;
				Some(word)
			}
		}
	}
}

impl<R: Rng> FusedIterator for Generator<'_, '_, R> {}
