//! Core domain types for the puzzle
//!
//! Words and per-letter feedback. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Color, Feedback, FeedbackFormatError};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, WordError, letter_index};
