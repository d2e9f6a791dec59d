/// Start sentinels placed before the first token.
pub const START_TOKENS: [&str; 2] = ["<s1>", "<s2>"];

/// End sentinel placed after the last token.
pub const END_TOKEN: &str = "</s>";

/// Wraps a cleaned token sequence with `<s1> <s2> ... </s>`.
///
/// Sentinels are structural: they are added after vocabulary folding and
/// never belong to the vocabulary.
pub fn pad_sequence(tokens: Vec<String>) -> Vec<String> {
	let mut padded = Vec::with_capacity(tokens.len() + START_TOKENS.len() + 1);
	padded.extend(START_TOKENS.iter().map(|s| (*s).to_owned()));
	padded.extend(tokens);
	padded.push(END_TOKEN.to_owned());
	padded
}

/// Returns true for the start and end sentinels.
pub fn is_sentinel(token: &str) -> bool {
	token == END_TOKEN || START_TOKENS.contains(&token)
}
