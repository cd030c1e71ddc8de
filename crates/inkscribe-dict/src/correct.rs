//! Fuzzy word correction
//!
//! Correction runs in stages, each stopping at the first stage with a
//! dictionary hit:
//!
//! 1. strip one leading and one trailing punctuation character and note
//!    a leading capital
//! 2. exact lookup (the word's frequency is bumped)
//! 3. substitute every alphabet letter for each unknown-character
//!    sentinel, one position at a time
//! 4. replace any single position of a stage-3 candidate
//! 5. replace any single position of a stage-4 candidate
//! 6. give up and return the normalized input
//!
//! Stage 5 re-expands every stage-4 candidate, so it reaches words that
//! differ from a stage-3 candidate in up to two positions.

use std::collections::BTreeSet;

use inkscribe_core::UNKNOWN_CHAR;
use log::debug;

use crate::Dictionary;

/// Letters tried in substitutions
pub const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ü',
];

/// Word split from its surrounding punctuation
struct Normalized {
    prefix: Option<char>,
    body: String,
    suffix: Option<char>,
    capital: bool,
}

impl Normalized {
    fn new(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        let prefix = match chars.first() {
            Some(&c) if is_sign(c) => {
                chars.remove(0);
                Some(c)
            }
            _ => None,
        };
        let suffix = match chars.last() {
            Some(&c) if is_sign(c) => chars.pop(),
            _ => None,
        };
        let capital = chars.first().is_some_and(|c| c.is_uppercase());
        let body: String = chars.into_iter().collect();
        Self {
            prefix,
            body: body.to_lowercase(),
            suffix,
            capital,
        }
    }

    /// Re-apply capital and punctuation to a (lower-case) word
    fn restore(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + 2);
        out.extend(self.prefix);
        let mut chars = word.chars();
        if self.capital
            && let Some(first) = chars.next()
        {
            out.extend(first.to_uppercase());
        }
        out.extend(chars);
        out.extend(self.suffix);
        out
    }
}

fn is_sign(c: char) -> bool {
    !c.is_alphanumeric() && c != UNKNOWN_CHAR
}

impl Dictionary {
    /// Correct one recognized word
    ///
    /// Returns the best dictionary match with the input's leading capital
    /// and surrounding punctuation restored, or the normalized input when
    /// nothing matches. An exact match also counts as one more
    /// occurrence of the word. Among equally frequent matches the
    /// alphabetically first one wins.
    pub fn correct_word(&mut self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        let norm = Normalized::new(word);
        if norm.body.is_empty() {
            return norm.restore("");
        }

        if let Some(freq) = self.words.get_mut(&norm.body) {
            *freq += 1;
            return norm.restore(&norm.body);
        }

        let substituted = replace_unknown(&norm.body);
        if let Some(best) = self.best_word(substituted.iter()) {
            debug!("dict: {word:?} -> {best:?} by sentinel substitution");
            return norm.restore(&best);
        }

        let distance1 = expand(&substituted);
        if let Some(best) = self.best_word(distance1.iter()) {
            debug!("dict: {word:?} -> {best:?} at distance 1");
            return norm.restore(&best);
        }

        let mut hits = BTreeSet::new();
        for candidate in &distance1 {
            for_each_variant(candidate, |variant| {
                if self.words.contains_key(variant) {
                    hits.insert(variant.to_string());
                }
            });
        }
        if let Some(best) = self.best_word(hits.iter()) {
            debug!("dict: {word:?} -> {best:?} at distance 2");
            return norm.restore(&best);
        }

        norm.restore(&norm.body)
    }

    /// Most frequent known word among `candidates`
    ///
    /// Candidates must arrive in ascending order; the first of several
    /// equally frequent words is kept. Words with frequency 0 never win.
    fn best_word<'a>(&self, candidates: impl Iterator<Item = &'a String>) -> Option<String> {
        let mut best: Option<(&String, u64)> = None;
        for word in candidates {
            let Some(&freq) = self.words.get(word) else {
                continue;
            };
            if freq > best.map_or(0, |(_, f)| f) {
                best = Some((word, freq));
            }
        }
        best.map(|(w, _)| w.clone())
    }
}

/// One candidate per alphabet letter and sentinel position; `{word}` if
/// the word holds no sentinel
fn replace_unknown(word: &str) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = BTreeSet::new();
    for (i, &c) in chars.iter().enumerate() {
        if c != UNKNOWN_CHAR {
            continue;
        }
        let mut copy = chars.clone();
        for letter in ALPHABET {
            copy[i] = letter;
            out.insert(copy.iter().collect());
        }
    }
    if out.is_empty() {
        out.insert(word.to_string());
    }
    out
}

/// Every single-position alphabet substitution of every word in `words`
fn expand(words: &BTreeSet<String>) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for word in words {
        for_each_variant(word, |variant| {
            out.insert(variant.to_string());
        });
    }
    out
}

fn for_each_variant(word: &str, mut f: impl FnMut(&str)) {
    let mut chars: Vec<char> = word.chars().collect();
    let mut buf = String::with_capacity(word.len() + 2);
    for i in 0..chars.len() {
        let original = chars[i];
        for letter in ALPHABET {
            chars[i] = letter;
            buf.clear();
            buf.extend(&chars);
            f(&buf);
        }
        chars[i] = original;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, u64)]) -> Dictionary {
        let mut d = Dictionary::new();
        for &(w, f) in entries {
            d.insert(w, f);
        }
        d
    }

    #[test]
    fn test_exact_match_bumps_frequency() {
        let mut d = dict(&[("hello", 5)]);
        assert_eq!(d.correct_word("hello"), "hello");
        assert_eq!(d.frequency("hello"), Some(6));
        assert_eq!(d.correct_word("Hello"), "Hello");
        assert_eq!(d.frequency("hello"), Some(7));
    }

    #[test]
    fn test_sentinel_prefers_frequent_word() {
        let mut d = dict(&[("hello", 5), ("hallo", 1)]);
        assert_eq!(d.correct_word("h?llo"), "hello");
        // non-exact corrections leave frequencies alone
        assert_eq!(d.frequency("hello"), Some(5));
    }

    #[test]
    fn test_trailing_punctuation_restored() {
        let mut d = dict(&[("hello", 1)]);
        assert_eq!(d.correct_word("Hello,"), "Hello,");
        assert_eq!(d.correct_word("(hello)"), "(hello)");
        assert_eq!(d.correct_word("\"H?llo\""), "\"Hello\"");
        assert_eq!(d.frequency("hello"), Some(3));
    }

    #[test]
    fn test_distance_one_and_two() {
        let mut d = dict(&[("world", 2)]);
        assert_eq!(d.correct_word("wprld"), "world");
        assert_eq!(d.correct_word("wprlb"), "world");
        assert_eq!(d.correct_word("Wqrlb!"), "World!");
        // three substitutions are out of reach
        assert_eq!(d.correct_word("xprlb"), "xprlb");
    }

    #[test]
    fn test_tie_breaks_alphabetically() {
        let mut d = dict(&[("cat", 3), ("bat", 3), ("hat", 3)]);
        assert_eq!(d.correct_word("?at"), "bat");
    }

    #[test]
    fn test_zero_frequency_never_wins() {
        let mut d = dict(&[("cat", 0)]);
        assert_eq!(d.correct_word("c?t"), "c?t");
    }

    #[test]
    fn test_fallback_lowercases() {
        let mut d = Dictionary::new();
        assert_eq!(d.correct_word("QWERTZ"), "Qwertz");
        assert_eq!(d.correct_word("x?y"), "x?y");
    }

    #[test]
    fn test_degenerate_input() {
        let mut d = dict(&[("a", 1)]);
        assert_eq!(d.correct_word(""), "");
        assert_eq!(d.correct_word(","), ",");
        assert_eq!(d.correct_word("?"), "a");
        assert_eq!(d.correct_word("-a-"), "-a-");
    }

    #[test]
    fn test_umlaut_alphabet() {
        let mut d = dict(&[("über", 4)]);
        assert_eq!(d.correct_word("?ber"), "über");
        assert_eq!(d.correct_word("Uber"), "Über");
    }
}
