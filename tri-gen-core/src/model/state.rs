use std::collections::HashMap;

/// Next-word distribution of a single context `(w1, w2)`.
///
/// A `State` is one row of the trigram table: every word observed right
/// after the context, with its occurrence count, plus the row total.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Sample the next word from the empirical distribution
///
/// ## Invariants
/// - `total` equals the sum of all transition counts
/// - Each transition occurrence count is strictly positive
/// - Transitions keep the order in which words were first observed; sampling
///   walks them in that order, so it decides which word a given random draw
///   lands on
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Observed next words and their counts, in first-insertion order.
	/// Example: [("rabbit", 12), ("queen", 3)]
	transitions: Vec<(String, usize)>,
	/// Index of each observed word in `transitions`.
	positions: HashMap<String, usize>,
	/// Sum of all counts in `transitions`.
	total: usize,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of `next_word` after this context.
	///
	/// - If the word was already observed, its count is increased.
	/// - Otherwise it is appended with an initial count of 1.
	pub fn add_transition(&mut self, next_word: &str) {
		match self.positions.get(next_word) {
			Some(&index) => self.transitions[index].1 += 1,
			None => {
				self.positions.insert(next_word.to_owned(), self.transitions.len());
				self.transitions.push((next_word.to_owned(), 1));
			}
		}
		self.total += 1;
	}

	/// Picks the next word for a uniform draw `r` in `[0, 1)`.
	///
	/// Walks the transitions in insertion order, accumulating `count / total`,
	/// and returns the first word whose cumulative probability reaches `r`.
	/// If rounding leaves the cumulative sum just below `r`, the last word is
	/// returned.
	///
	/// Returns `None` only if the state has no observations.
	pub fn sample(&self, r: f64) -> Option<&str> {
		if self.total == 0 {
			return None;
		}
		debug_assert!(!self.transitions.is_empty(), "positive total with no transitions");
		debug_assert_eq!(self.total, self.transitions.iter().map(|(_, c)| c).sum::<usize>());

		let total = self.total as f64;
		let mut cumulative = 0.0;
		for (word, occurrence) in &self.transitions {
			cumulative += *occurrence as f64 / total;
			if r <= cumulative {
				return Some(word);
			}
		}

		// Rounding fallback
		self.transitions.last().map(|(word, _)| word.as_str())
	}

	/// Observed transitions in first-insertion order.
	pub fn transitions(&self) -> &[(String, usize)] {
		&self.transitions
	}

	/// Number of observations of this context.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Occurrence count of `word` after this context (0 if never seen).
	pub fn count_of(&self, word: &str) -> usize {
		self.positions
			.get(word)
			.map_or(0, |&index| self.transitions[index].1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state_of(words: &[&str]) -> State {
		let mut state = State::new();
		for word in words {
			state.add_transition(word);
		}
		state
	}

	#[test]
	fn counts_accumulate_in_first_seen_order() {
		let state = state_of(&["b", "a", "b", "c", "b"]);
		assert_eq!(
			state.transitions(),
			&[("b".to_owned(), 3), ("a".to_owned(), 1), ("c".to_owned(), 1)]
		);
		assert_eq!(state.total(), 5);
		assert_eq!(state.count_of("b"), 3);
		assert_eq!(state.count_of("z"), 0);
	}

	#[test]
	fn empty_state_has_no_sample() {
		assert_eq!(State::new().sample(0.5), None);
	}

	#[test]
	fn single_word_is_always_sampled() {
		let state = state_of(&["a", "a"]);
		assert_eq!(state.sample(0.0), Some("a"));
		assert_eq!(state.sample(0.999_999), Some("a"));
	}

	#[test]
	fn sample_walks_cumulative_distribution() {
		// a: 0.25, b: 0.5, c: 0.25
		let state = state_of(&["a", "b", "b", "c"]);
		assert_eq!(state.sample(0.0), Some("a"));
		assert_eq!(state.sample(0.25), Some("a"));
		assert_eq!(state.sample(0.26), Some("b"));
		assert_eq!(state.sample(0.75), Some("b"));
		assert_eq!(state.sample(0.76), Some("c"));
	}

	#[test]
	fn rounding_shortfall_falls_back_to_last_word() {
		// 1/3 + 1/3 + 1/3 may sum just below 1.0
		let state = state_of(&["a", "b", "c"]);
		assert_eq!(state.sample(1.0), Some("c"));
		assert_eq!(state.sample(f64::from_bits(1.0f64.to_bits() - 1)), Some("c"));
	}

	#[test]
	fn many_successors_keep_order_and_counts() {
		let mut state = State::new();
		for round in 0..3 {
			for i in 0..1000 {
				if round < 2 || i % 2 == 0 {
					state.add_transition(&format!("w{}", i));
				}
			}
		}

		assert_eq!(state.transitions().len(), 1000);
		assert_eq!(state.total(), 2500);
		assert_eq!(state.transitions()[0], ("w0".to_owned(), 3));
		assert_eq!(state.transitions()[999], ("w999".to_owned(), 2));
		assert_eq!(state.count_of("w500"), 3);
		assert_eq!(state.count_of("w501"), 2);
		assert!(state.transitions().iter().enumerate().all(|(i, (w, _))| *w == format!("w{}", i)));
	}
}
