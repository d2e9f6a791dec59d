use std::sync::LazyLock;

use regex::Regex;

/// Anything that is neither a letter, a number, `_` nor whitespace.
///
/// Combining marks and connector punctuation other than `_` are excluded.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
	// Static pattern, cannot fail
	Regex::new(r"[^\p{L}\p{N}_\s]").unwrap()
});

/// Normalizes raw text into a flat sequence of tokens.
///
/// - Lower-cases the whole input
/// - Replaces each punctuation character with a single space
/// - Splits on whitespace runs, dropping empty segments
///
/// Apostrophes and hyphens count as punctuation, so `"don't"` yields
/// `["don", "t"]` and `"well-known"` yields `["well", "known"]`.
pub fn normalize(raw: &str) -> Vec<String> {
	let lowered = raw.to_lowercase();
	PUNCTUATION
		.replace_all(&lowered, " ")
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}
