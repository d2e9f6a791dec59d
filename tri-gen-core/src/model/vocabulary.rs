use std::collections::{HashMap, HashSet};

/// Token standing in for every word folded out of the vocabulary.
pub const UNK_TOKEN: &str = "<unk>";

/// Set of tokens kept after frequency folding.
///
/// # Invariants
/// - Always contains `UNK_TOKEN`
/// - Never contains sentinel tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
	words: HashSet<String>,
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self { words: HashSet::from([UNK_TOKEN.to_owned()]) }
	}
}

impl Vocabulary {
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of words, `<unk>` included.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Never true, `<unk>` is always present.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}

/// Builds the vocabulary and maps rare tokens to `<unk>`.
///
/// A token is rare when its frequency is `<= unk_threshold`. The comparison
/// is inclusive: with a threshold of 1 every hapax is folded. A negative
/// threshold folds nothing.
///
/// Returns the vocabulary and the cleaned sequence, which has the same
/// length and order as `tokens`.
pub fn build_vocabulary(tokens: &[String], unk_threshold: i64) -> (Vocabulary, Vec<String>) {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for token in tokens {
		*counts.entry(token.as_str()).or_insert(0) += 1;
	}

	let mut vocabulary = Vocabulary::default();
	for (word, count) in counts {
		if !is_rare(count, unk_threshold) {
			vocabulary.words.insert(word.to_owned());
		}
	}

	let cleaned = tokens
		.iter()
		.map(|token| {
			if vocabulary.contains(token) {
				token.clone()
			} else {
				UNK_TOKEN.to_owned()
			}
		})
		.collect();

	(vocabulary, cleaned)
}

fn is_rare(count: usize, unk_threshold: i64) -> bool {
	i64::try_from(count).is_ok_and(|count| count <= unk_threshold)
}
