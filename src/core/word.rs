//! Puzzle word representation
//!
//! A Word stores an uppercase `A-Z` word of fixed length, with helpers for
//! the letter counting feedback calculation needs.

use std::fmt;
use thiserror::Error;

/// Longest word the engine accepts
///
/// Keeps base-3 pattern codes within a `u32`.
pub const MAX_WORD_LENGTH: usize = 15;

/// Number of letters in the alphabet (`A-Z`)
pub const ALPHABET_SIZE: usize = 26;

/// Map an uppercase letter to its alphabet slot (`A` = 0)
#[inline]
#[must_use]
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(usize::from(letter - b'A'))
    } else {
        None
    }
}

/// An uppercase puzzle word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    UnsupportedLength(usize),
    #[error("Word '{0}' must contain only letters A-Z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string of any supported length
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the length is outside `1..=MAX_WORD_LENGTH` or the
    /// text contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();
        let len = text.chars().count();
        if len == 0 || len > MAX_WORD_LENGTH {
            return Err(WordError::UnsupportedLength(len));
        }
        Self::normalize(text)
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// Length is checked before the alphabet, so a short word with bad
    /// characters reports the length problem.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` or `WordError::InvalidCharacters`.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let text = text.as_ref();
        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }
        Self::new(text)
    }

    fn normalize(text: &str) -> Result<Self, WordError> {
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Build a word from letters already known to be uppercase `A-Z`
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words have at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Occurrence count of each letter, indexed by alphabet slot
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in self.letters() {
            if let Some(slot) = letter_index(ch) {
                counts[slot] += 1;
            }
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
