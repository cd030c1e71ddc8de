//! Serialization for Dictionary
//!
//! # Format
//!
//! ```text
//! word,frequency;word,frequency;...
//! ```
//!
//! Entries end with `;` and may be spread over any number of lines.
//! Entries are written in word order. On read, blank entries are ignored
//! and malformed ones (no `,`, empty word, non-numeric frequency) are
//! skipped with a warning.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::Dictionary;
use crate::error::DictResult;

const ENTRY_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';

impl Dictionary {
    /// Serialize all entries
    ///
    /// Words containing the entry separator can't be represented and are
    /// left out with a warning.
    pub fn to_serialized(&self) -> String {
        let mut out = String::new();
        for (word, freq) in self.iter() {
            if word.contains(ENTRY_SEPARATOR) || word.trim().is_empty() {
                warn!("dict: can't serialize word {word:?}, skipping");
                continue;
            }
            out.push_str(word);
            out.push(FIELD_SEPARATOR);
            out.push_str(&freq.to_string());
            out.push(ENTRY_SEPARATOR);
        }
        out
    }

    /// Parse serialized entries, skipping malformed ones
    pub fn from_serialized(text: &str) -> Self {
        let mut dict = Dictionary::new();
        let mut skipped = 0usize;
        for entry in text.split(ENTRY_SEPARATOR) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match parse_entry(entry) {
                Some((word, freq)) => dict.insert(word, freq),
                None => {
                    warn!("dict: skipping malformed entry {entry:?}");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!("dict: skipped {skipped} malformed entries");
        }
        dict
    }

    /// Write the serialized dictionary to a file
    pub fn save(&self, path: impl AsRef<Path>) -> DictResult<()> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_serialized().as_bytes())?;
        writer.flush()?;
        info!("dict: saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a dictionary written by [`Dictionary::save`]
    pub fn load(path: impl AsRef<Path>) -> DictResult<Self> {
        let path = path.as_ref();
        let dict = Self::from_serialized(&fs::read_to_string(path)?);
        info!("dict: loaded {} entries from {}", dict.len(), path.display());
        Ok(dict)
    }
}

fn parse_entry(entry: &str) -> Option<(&str, u64)> {
    let (word, freq) = entry.rsplit_once(FIELD_SEPARATOR)?;
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    let freq = freq.trim().parse().ok()?;
    Some((word, freq))
}
