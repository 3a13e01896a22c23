//! Word solving command
//!
//! Plays a session against a known secret, letting the assistant pick every
//! guess, and returns the solution path.

use crate::config::SessionConfig;
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use crate::session::{GameState, GuessSession};
use crate::solver::suggest::calculate_entropy;
use crate::solver::{CandidateFilter, EmptyCandidateSet, Picker};
use anyhow::{Context, Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub secret: Word,
    pub session: SessionConfig,
    /// Opening guess to use instead of the picked one
    pub first_guess: Option<Word>,
    pub picker: Picker,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let session = SessionConfig::default().with_word_length(secret.len());
        Self {
            secret,
            session,
            first_guess: None,
            picker: Picker::default(),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Solve a known secret by always playing the assistant's suggestion
///
/// The random picker draws from its own generator seeded from `rng`.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration does not fit the dictionary or secret
/// - The secret is not a dictionary word
/// - The forced first guess has the wrong length or is rejected by the session
pub fn solve_word<R: Rng>(
    config: SolveConfig,
    dictionary: &Dictionary,
    mut rng: R,
) -> Result<SolveResult> {
    ensure!(
        dictionary.contains(&config.secret),
        "{} is not in the dictionary",
        config.secret
    );
    if let Some(first) = &config.first_guess {
        ensure!(
            first.len() == config.session.word_length,
            "First guess {first} must have {} letters",
            config.session.word_length
        );
    }

    let mut picker_rng = StdRng::seed_from_u64(rng.random());
    let mut session =
        GuessSession::with_secret(config.session, dictionary, rng, config.secret.clone())
            .context("Cannot start session")?;
    let mut filter = CandidateFilter::new(config.session.word_length);
    let mut candidates = filter.candidates(dictionary);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while session.state() == GameState::InProgress {
        let candidates_before = candidates.len();

        let (guess, entropy) = match (&config.first_guess, guesses.is_empty()) {
            (Some(first), true) => (first.clone(), calculate_entropy(first, &candidates)),
            _ => {
                let Some((word, entropy)) = config.picker.pick(&candidates, &mut picker_rng) else {
                    return Err(EmptyCandidateSet {
                        guesses: filter.len(),
                    })
                    .with_context(|| format!("Lost track of {}", config.secret));
                };
                (word.clone(), entropy)
            }
        };

        let feedback = session
            .submit_guess(guess.text())
            .with_context(|| format!("Guess {guess} was rejected"))?
            .clone();
        filter.record(guess.clone(), feedback.clone())?;
        candidates = filter.narrow(&candidates);

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            entropy,
        });
    }

    Ok(SolveResult {
        success: session.state() == GameState::Won,
        guesses,
        secret: config.secret,
    })
}
