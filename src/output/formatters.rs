//! Formatting utilities for terminal output

use crate::core::{Color, Feedback};
use crate::keyboard::{KeyColor, KeyboardState};
use colored::Colorize;

/// Keyboard layout used for on-screen keyboards
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Format feedback as colored letter tiles, e.g. ` F  L  O  O  D `
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .map(|&(letter, color)| {
            let tile = format!(" {} ", char::from(letter));
            match color {
                Color::Green => tile.black().on_green().bold().to_string(),
                Color::Yellow => tile.black().on_yellow().bold().to_string(),
                Color::Red => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Render one keyboard key with its color
#[must_use]
pub fn key_label(letter: u8, color: KeyColor) -> String {
    let label = char::from(letter).to_string();
    match color {
        KeyColor::Green => label.green().bold().to_string(),
        KeyColor::Yellow => label.yellow().bold().to_string(),
        KeyColor::Red => label.bright_black().to_string(),
        KeyColor::Unset => label.white().to_string(),
    }
}

/// Render the keyboard as three indented rows
#[must_use]
pub fn keyboard_rows(state: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| key_label(letter, state.get(letter)))
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar of `max` cells
#[must_use]
pub fn attempts_bar(remaining: usize, max: usize) -> String {
    create_progress_bar(remaining as f64, max as f64, max)
}
