//! Ordered word pool with constant-time membership
//!
//! The dictionary serves both as the pool solutions are drawn from and as the
//! acceptance filter for guesses. Order is significant: daily puzzles index into
//! it, so it must only ever grow at the tail.

use super::{WORDS, loader::words_from_slice};
use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no words")]
    Empty,
    #[error("dictionary mixes word lengths: expected {expected}, found '{word}'")]
    MixedLengths { expected: usize, word: String },
}

/// Ordered, append-stable set of words sharing one length
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from words in their canonical order
    ///
    /// Repeated words are skipped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` for an empty input and
    /// `DictionaryError::MixedLengths` if the words do not share one length.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();
        let mut word_length = None;

        for word in words {
            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(DictionaryError::MixedLengths {
                    expected,
                    word: word.text().to_string(),
                });
            }
            if index.insert(word.text().to_string()) {
                ordered.push(word);
            } else {
                log::warn!("Skipping duplicate dictionary word '{word}'");
            }
        }

        let word_length = word_length.ok_or(DictionaryError::Empty)?;
        log::debug!(
            "Built dictionary of {} words ({word_length} letters)",
            ordered.len()
        );

        Ok(Self {
            words: ordered,
            index,
            word_length,
        })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Membership test; `word` must already be normalized
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Word at a position in canonical order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Result<Dictionary, DictionaryError> {
        Dictionary::new(words_from_slice(words))
    }

    #[test]
    fn preserves_order_and_membership() {
        let dict = dictionary(&["simba", "tembo", "twiga"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(1).map(Word::text), Some("tembo"));
        assert!(dict.contains("twiga"));
        assert!(!dict.contains("punda"));
        assert_eq!(dict.word_length(), 5);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let dict = dictionary(&["simba", "tembo", "simba", "twiga"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(2).map(Word::text), Some("twiga"));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(dictionary(&[]).unwrap_err(), DictionaryError::Empty);
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        assert_eq!(
            dictionary(&["simba", "neno"]).unwrap_err(),
            DictionaryError::MixedLengths {
                expected: 5,
                word: "neno".to_string()
            }
        );
    }

    #[test]
    fn other_lengths_are_supported() {
        let dict = dictionary(&["neno", "nane", "kazi"]).unwrap();
        assert_eq!(dict.word_length(), 4);
    }
}
