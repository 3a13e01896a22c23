//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod check;
mod input;
pub mod simple;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::check_guess;
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
