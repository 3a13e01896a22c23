//! Puzzle assistant
//!
//! Narrows a dictionary to the words consistent with observed feedback and
//! picks suggestions from what remains.

mod filter;
pub mod suggest;

pub use filter::{CandidateFilter, EmptyCandidateSet};
pub use suggest::{GuessMetrics, Picker, best_guess, calculate_metrics, random_guess};
