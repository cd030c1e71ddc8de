//! inkscribe-dict - Frequency dictionary and word correction
//!
//! A [`Dictionary`] maps lower-case words to how often they were seen.
//! Recognized words are corrected against it by
//! [`Dictionary::correct_word`], which tries progressively looser
//! candidate sets and returns the most frequent hit.
//!
//! # Examples
//!
//! ```
//! use inkscribe_dict::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.insert("hello", 5);
//! dict.insert("hallo", 1);
//! assert_eq!(dict.correct_word("H?llo"), "Hello");
//! ```

mod corpus;
mod correct;
mod error;
mod serial;

pub use correct::ALPHABET;
pub use error::{DictError, DictResult};

use std::collections::HashMap;

/// Word frequency map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashMap<String, u64>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word once, lower-cased
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.bump(&word.as_ref().to_lowercase());
        }
    }

    /// Set the frequency of a word, replacing any previous count
    pub fn insert(&mut self, word: impl Into<String>, frequency: u64) {
        self.words.insert(word.into(), frequency);
    }

    /// Frequency of a word, `None` if unknown
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        let mut entries: Vec<(&str, u64)> =
            self.words.iter().map(|(w, &f)| (w.as_str(), f)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    fn bump(&mut self, word: &str) {
        match self.words.get_mut(word) {
            Some(freq) => *freq += 1,
            None => {
                self.words.insert(word.to_string(), 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_words_counts() {
        let mut dict = Dictionary::new();
        dict.add_words(["The", "cat", "the"]);
        assert_eq!(dict.frequency("the"), Some(2));
        assert_eq!(dict.frequency("cat"), Some(1));
        assert_eq!(dict.frequency("The"), None);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_iter_sorted() {
        let mut dict = Dictionary::new();
        dict.insert("b", 1);
        dict.insert("a", 3);
        dict.insert("c", 2);
        let words: Vec<&str> = dict.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
