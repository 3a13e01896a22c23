//! On-screen keyboard color state
//!
//! Folds every feedback entry of a game into one color per letter. A key only
//! ever moves up the order `Unset < Red < Yellow < Green`; hints force Green.

use crate::core::{ALPHABET_SIZE, Color, Feedback, letter_index};

/// Display color of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum KeyColor {
    #[default]
    Unset,
    Red,
    Yellow,
    Green,
}

impl From<Color> for KeyColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Self::Red,
            Color::Yellow => Self::Yellow,
            Color::Green => Self::Green,
        }
    }
}

/// Color of every key, indexed by letter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardState {
    keys: [KeyColor; ALPHABET_SIZE],
}

impl KeyboardState {
    /// Color of a letter (either case)
    ///
    /// # Panics
    /// Panics if `letter` is not an ASCII letter.
    #[must_use]
    pub fn get(&self, letter: u8) -> KeyColor {
        self.keys[slot(letter)]
    }

    /// All keys from `A` to `Z` with their colors
    pub fn iter(&self) -> impl Iterator<Item = (u8, KeyColor)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied())
    }
}

/// Accumulates keyboard colors across the guesses of one game
#[derive(Debug, Clone, Default)]
pub struct KeyboardColorAggregator {
    state: KeyboardState,
    hinted: [bool; ALPHABET_SIZE],
}

impl KeyboardColorAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise each letter of `feedback` to at least its reported color
    ///
    /// Idempotent and order-independent.
    pub fn absorb(&mut self, feedback: &Feedback) {
        for &(letter, color) in feedback.tiles() {
            let key = &mut self.state.keys[slot(letter)];
            *key = (*key).max(KeyColor::from(color));
        }
    }

    /// Reveal a letter: its key becomes Green regardless of prior state
    pub fn apply_hint(&mut self, letter: u8) {
        let slot = slot(letter);
        self.state.keys[slot] = KeyColor::Green;
        self.hinted[slot] = true;
    }

    /// Whether a letter was revealed by a hint
    #[must_use]
    pub fn is_hinted(&self, letter: u8) -> bool {
        self.hinted[slot(letter)]
    }

    #[must_use]
    pub fn current(&self) -> &KeyboardState {
        &self.state
    }

    /// Forget all colors and hints
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn slot(letter: u8) -> usize {
    letter_index(letter.to_ascii_uppercase())
        .unwrap_or_else(|| panic!("keyboard letter must be A-Z, got {:?}", char::from(letter)))
}
