//! Wordle Engine
//!
//! Word-guessing game engine: feedback scoring, keyboard coloring, candidate
//! filtering and a guess session state machine, with TUI and CLI front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Word};
//!
//! let secret = Word::new("robot").unwrap();
//! let guess = Word::new("flood").unwrap();
//!
//! let feedback = Feedback::compute(&secret, &guess);
//! assert_eq!(feedback.to_string(), "F.R L.R O.Y O.G D.R");
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Word dictionaries
pub mod dictionary;

// Keyboard color aggregation
pub mod keyboard;

// Guess session state machine
pub mod session;

// Candidate filtering and suggestions
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
