//! Dictionary construction from a text corpus

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::Dictionary;
use crate::error::{DictError, DictResult};

impl Dictionary {
    /// Build a dictionary from every regular file in a directory
    ///
    /// Files are read in name order and split on whitespace; punctuation
    /// around each token is stripped and the rest is counted lower-cased.
    /// Subdirectories are ignored. A file that isn't valid UTF-8 is read
    /// as Latin-1 instead, with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::NotADirectory`] if `dir` isn't a directory and
    /// [`DictError::Io`] if a file can't be read.
    pub fn from_corpus_dir(dir: impl AsRef<Path>) -> DictResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DictError::NotADirectory(dir.display().to_string()));
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut dict = Dictionary::new();
        let mut tokens = 0usize;
        for path in &files {
            let text = decode_text(fs::read(path)?, path);
            let before = tokens;
            for word in text.split_whitespace().filter_map(normalize_token) {
                dict.bump(&word);
                tokens += 1;
            }
            debug!("dict: {} tokens from {}", tokens - before, path.display());
        }
        info!(
            "dict: built {} words from {tokens} tokens in {} files",
            dict.len(),
            files.len()
        );
        Ok(dict)
    }

    /// Count the words of a text the way corpus files are counted
    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace().filter_map(normalize_token) {
            self.bump(&word);
        }
    }
}

/// UTF-8 text, falling back to Latin-1 byte by byte
fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("dict: {} is not UTF-8, reading as Latin-1", path.display());
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Strip leading and trailing punctuation and lower-case; `None` if
/// nothing remains
fn normalize_token(token: &str) -> Option<String> {
    let word = token.trim_matches(|c: char| !c.is_alphanumeric());
    (!word.is_empty()).then(|| word.to_lowercase())
}
