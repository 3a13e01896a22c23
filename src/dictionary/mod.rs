//! Dictionaries of same-length words
//!
//! The engine only needs membership, uniform sampling and iteration. The
//! default five-letter list is compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{MAX_WORD_LENGTH, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error type for building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Dictionary contains no words")]
    Empty,
    #[error("Word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    UnsupportedLength(usize),
    #[error("Word '{word}' does not have {expected} letters")]
    LengthMismatch { word: String, expected: usize },
    #[error("Failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable set of words sharing one length
///
/// Keeps insertion order for iteration and a hash index for membership.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words that must all have `word_length` letters
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the length is unsupported, a word has the
    /// wrong length, or no words remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::dictionary::Dictionary;
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(5, words).unwrap();
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("slate").unwrap()));
    /// ```
    pub fn new(
        word_length: usize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(DictionaryError::UnsupportedLength(word_length));
        }

        let mut index = FxHashSet::default();
        let mut ordered = Vec::new();
        for word in words {
            if word.len() != word_length {
                return Err(DictionaryError::LengthMismatch {
                    word: word.text().to_string(),
                    expected: word_length,
                });
            }
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            word_length,
            words: ordered,
            index,
        })
    }

    /// Build from raw strings, skipping entries that are not valid words
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if nothing valid remains.
    pub fn from_strs(word_length: usize, entries: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(word_length, loader::words_from_slice(entries, word_length))
    }

    /// The default five-letter dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let dictionary = Self::from_strs(5, WORDS)?;
        info!(words = dictionary.len(), "loaded embedded dictionary");
        Ok(dictionary)
    }

    /// Load a word list file, keeping only words with `word_length` letters
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no valid words.
    pub fn from_file(path: impl AsRef<Path>, word_length: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words =
            loader::load_from_file(path, word_length).map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let dictionary = Self::new(word_length, words)?;
        info!(
            path = %path.display(),
            words = dictionary.len(),
            word_length,
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty dictionaries are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Draw one word uniformly at random
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
