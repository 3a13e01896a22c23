//! Feedback check command
//!
//! Scores one guess against a given secret.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result, ensure};

/// Score `guess` against `secret`
///
/// Neither word has to be in a dictionary.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(secret: &str, guess: &str) -> Result<Feedback> {
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    ensure!(
        secret.len() == guess.len(),
        "Secret has {} letters but guess has {}",
        secret.len(),
        guess.len()
    );

    Ok(Feedback::compute(&secret, &guess))
}
