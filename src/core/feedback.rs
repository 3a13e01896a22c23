//! Per-letter guess feedback calculation and representation
//!
//! A feedback entry pairs every letter of a guess with a verdict:
//! - Red: letter not in the secret (or all its occurrences already credited)
//! - Yellow: letter in the secret, wrong position
//! - Green: letter in the correct position
//!
//! Entries round-trip through a textual form of space-separated
//! `<LETTER>.<CODE>` tokens, e.g. `F.R L.R O.Y O.G D.R`.

use super::word::{MAX_WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    /// Single-letter code used by the textual encoding
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse a color code (case-insensitive)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            _ => None,
        }
    }

    /// Tile emoji for sharing and terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Red => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    const fn digit(self) -> u32 {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }
}

/// Error raised when textual feedback cannot be parsed or recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackFormatError {
    #[error("Feedback is empty")]
    Empty,
    #[error("Feedback must have {expected} tokens, got {actual}")]
    TokenCount { expected: usize, actual: usize },
    #[error("Token '{0}' must look like LETTER.CODE")]
    Separator(String),
    #[error("Token '{0}' does not start with a single letter A-Z")]
    Letter(String),
    #[error("Token '{0}' has an unknown color code (expected R, Y or G)")]
    ColorCode(String),
    #[error("Feedback covers {actual} letters but words have {expected}")]
    Length { expected: usize, actual: usize },
    #[error("Feedback letter {actual} at position {position} does not match guess letter {expected}")]
    LetterMismatch {
        position: usize,
        expected: char,
        actual: char,
    },
}

/// Ordered per-position verdicts for one guess
///
/// Always exactly as long as the guess that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    tiles: Vec<(u8, Color)>,
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements the puzzle's exact duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Green and remove them from the pool
    /// 2. Second pass, left to right: Yellow while the pool still holds the letter, else Red
    ///
    /// # Panics
    /// Panics if `secret` and `guess` differ in length. Callers validate
    /// guesses before scoring them.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Color, Feedback, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let guess = Word::new("flood").unwrap();
    /// let feedback = Feedback::compute(&secret, &guess);
    ///
    /// assert_eq!(
    ///     feedback.colors().collect::<Vec<_>>(),
    ///     [Color::Red, Color::Red, Color::Yellow, Color::Green, Color::Red]
    /// );
    /// assert_eq!(feedback.to_string(), "F.R L.R O.Y O.G D.R");
    /// ```
    #[must_use]
    pub fn compute(secret: &Word, guess: &Word) -> Self {
        assert_eq!(
            secret.len(),
            guess.len(),
            "secret and guess must have the same length"
        );

        let secret_letters = secret.letters();
        let guess_letters = guess.letters();
        let mut available = secret.letter_counts();
        let mut colors = vec![Color::Red; guess_letters.len()];

        // First pass: greens
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                colors[i] = Color::Green;
                if let Some(slot) = letter_index(g) {
                    available[slot] -= 1;
                }
            }
        }

        // Second pass: yellows from what the greens left over
        for (i, &g) in guess_letters.iter().enumerate() {
            if colors[i] == Color::Green {
                continue;
            }
            if let Some(slot) = letter_index(g)
                && available[slot] > 0
            {
                colors[i] = Color::Yellow;
                available[slot] -= 1;
            }
        }

        Self {
            tiles: guess_letters.iter().copied().zip(colors).collect(),
        }
    }

    /// Parse the textual encoding, requiring exactly `word_length` tokens
    ///
    /// Letters and codes are accepted in either case and normalized to
    /// uppercase. Nothing is returned unless every token parses.
    ///
    /// # Errors
    /// Returns `FeedbackFormatError` for a wrong token count, a missing `.`
    /// separator, a non-alphabet letter or an unknown color code.
    pub fn parse(text: &str, word_length: usize) -> Result<Self, FeedbackFormatError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(FeedbackFormatError::Empty);
        }
        if tokens.len() != word_length {
            return Err(FeedbackFormatError::TokenCount {
                expected: word_length,
                actual: tokens.len(),
            });
        }

        let tiles = tokens
            .into_iter()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tiles })
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// (letter, color) pair at a position
    #[must_use]
    pub fn get(&self, position: usize) -> Option<(u8, Color)> {
        self.tiles.get(position).copied()
    }

    /// All (letter, color) pairs in position order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[(u8, Color)] {
        &self.tiles
    }

    /// Letters in position order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles.iter().map(|&(letter, _)| letter)
    }

    /// Colors in position order
    pub fn colors(&self) -> impl DoubleEndedIterator<Item = Color> + '_ {
        self.tiles.iter().map(|&(_, color)| color)
    }

    /// The guessed word this feedback describes
    #[must_use]
    pub fn guess(&self) -> Word {
        let letters: Vec<u8> = self.letters().collect();
        Word::from_letters(&letters)
    }

    /// Check if every position is Green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.tiles.is_empty() && self.colors().all(|c| c == Color::Green)
    }

    /// Count positions with the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.colors().filter(|&c| c == color).count()
    }

    /// Colors packed as a base-3 number (Red = 0, Yellow = 1, Green = 2)
    ///
    /// Two entries for the same guess share a code exactly when their colors
    /// match, which makes the code a cheap grouping key.
    #[must_use]
    pub fn pattern_code(&self) -> u32 {
        debug_assert!(self.tiles.len() <= MAX_WORD_LENGTH);
        self.colors()
            .rev()
            .fold(0, |code, color| code * 3 + color.digit())
    }

    /// Convert to an emoji string such as "⬜⬜🟨🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors().map(Color::emoji).collect()
    }
}

fn parse_token(token: &str) -> Result<(u8, Color), FeedbackFormatError> {
    let Some((letter, code)) = token.split_once('.') else {
        return Err(FeedbackFormatError::Separator(token.to_string()));
    };

    let letter = match letter.as_bytes() {
        [b] if b.is_ascii_alphabetic() => b.to_ascii_uppercase(),
        _ => return Err(FeedbackFormatError::Letter(token.to_string())),
    };

    let mut chars = code.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_code(c),
        _ => None,
    }
    .ok_or_else(|| FeedbackFormatError::ColorCode(token.to_string()))?;

    Ok((letter, color))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(letter, color)) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}.{}", char::from(letter), color.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackFormatError;

    /// Parse with the word length taken from the token count
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.split_whitespace().count();
        if count > MAX_WORD_LENGTH {
            return Err(FeedbackFormatError::Length {
                expected: MAX_WORD_LENGTH,
                actual: count,
            });
        }
        Self::parse(s, count)
    }
}
