use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::error::CorpusError;

/// Corpus file used when none is given.
pub const DEFAULT_CORPUS: &str = "alice_in_wonderland.txt";

/// Folder searched for corpora when none is given.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Reads a whole corpus file as UTF-8.
///
/// A missing file is reported as `CorpusError::NotFound` so callers can
/// tell it apart from other I/O failures (permissions, invalid UTF-8).
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String, CorpusError> {
	let path = path.as_ref();
	match fs::read_to_string(path) {
		Ok(contents) => Ok(contents),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CorpusError::NotFound { path: path.to_path_buf() }),
		Err(e) => Err(e.into()),
	}
}

/// Builds the path of a corpus inside a data folder.
///
/// Example:
/// `"./data"` + `"alice.txt"` → `<cwd>/data/alice.txt`
pub fn corpus_path(folder: &str, name: &str) -> PathBuf {
	normalize_folder(folder).join(name)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the `.txt` corpora of a directory, sorted by name.
///
/// Returns file names only (no paths).
pub fn list_corpora<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, CorpusError> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		return Err(CorpusError::NotFound { path: dir.to_path_buf() });
	}

	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new("txt")) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}
	files.sort();

	Ok(files)
}
