use std::path::Path;

use clap::Parser;
use log::{info, warn};

use tri_gen_core::io::{self, DEFAULT_CORPUS, DEFAULT_DATA_DIR};
use tri_gen_core::model::generation_input::{GenerationInput, ModelConfig};
use tri_gen_core::{CorpusError, TrigramModel};

/// Train a word-trigram model on a text corpus and print generated samples.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
	/// Folder containing the corpora
	#[arg(long, default_value = DEFAULT_DATA_DIR)]
	data_dir: String,

	/// Corpus file name inside the data folder
	#[arg(long, default_value = DEFAULT_CORPUS)]
	corpus: String,

	/// Words seen this many times or fewer become <unk> (negative disables folding)
	#[arg(long, default_value_t = 1, allow_negative_numbers = true)]
	unk_threshold: i64,

	/// Number of samples to generate
	#[arg(long, default_value_t = 3)]
	samples: usize,

	/// Maximum number of words per sample
	#[arg(long, default_value_t = 40)]
	max_length: usize,

	/// Random seed for reproducible samples
	#[arg(long)]
	seed: Option<u64>,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

/// Explains where the corpus was expected and where to put it.
fn missing_corpus_message(path: &Path, corpus: &str, data_dir: &str) -> String {
	let mut message = format!(
		"Could not find corpus file at {}. Save it as '{}' in the '{}' folder.",
		path.display(),
		corpus,
		data_dir
	);
	if corpus == DEFAULT_CORPUS {
		message.push_str(" 'Alice's Adventures in Wonderland' can be downloaded from Project Gutenberg.");
	}
	message
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

	let config = ModelConfig { unk_threshold: cli.unk_threshold };
	let input = GenerationInput::new(cli.samples, cli.max_length, cli.seed)?;

	let corpus_path = io::corpus_path(&cli.data_dir, &cli.corpus);
	info!("Loading corpus from: {}", corpus_path.display());
	let text = match io::read_corpus(&corpus_path) {
		Ok(text) => text,
		Err(CorpusError::NotFound { path }) => {
			// Hint at what is actually there
			if let Ok(available) = io::list_corpora(io::normalize_folder(&cli.data_dir)) {
				if !available.is_empty() {
					warn!("Available corpora in {}: {}", cli.data_dir, available.join(", "));
				}
			}
			return Err(missing_corpus_message(&path, &cli.corpus, &cli.data_dir).into());
		}
		Err(e) => return Err(e.into()),
	};

	// Create and train the model
	let mut model = TrigramModel::from_config(&config);
	info!("Training trigram model...");
	model.fit(&text);
	if !model.is_trained() {
		warn!("Corpus contains no words, nothing to generate");
		return Ok(());
	}
	info!("Training complete.");

	let mut rng = input.make_rng();
	for i in 0..input.samples() {
		println!("=== Sample #{} ===", i + 1);
		println!("{}", model.generate(input.max_length, &mut rng));
		println!();
	}

	Ok(())
}
