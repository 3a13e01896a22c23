//! Picking one candidate to suggest
//!
//! Ranking uses Shannon entropy of the feedback distribution: the guess whose
//! possible outcomes split the remaining candidates most evenly wins.

use crate::core::{Feedback, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Largest guess pool scored exhaustively
///
/// Above this, only the first `ENTROPY_LIMIT` candidates are scored (still
/// against every candidate).
pub const ENTROPY_LIMIT: usize = 600;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::suggest::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    shannon_entropy(&group_by_pattern(guess, candidates))
}

/// Count candidates per feedback pattern code
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<u32, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let code = Feedback::compute(candidate, guess).pattern_code();
        *counts.entry(code).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern distribution
///
/// Returns 0.0 for an empty or certain distribution.
#[must_use]
pub fn shannon_entropy(pattern_counts: &FxHashMap<u32, usize>) -> f64 {
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst-case partition for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}

/// Highest-entropy candidate and its entropy
///
/// Ties go to the alphabetically first word, so the result is deterministic.
/// Returns `None` if there are no candidates.
#[must_use]
pub fn best_guess<'a>(candidates: &[&'a Word]) -> Option<(&'a Word, f64)> {
    if candidates.len() <= 2 {
        // Any remaining candidate is as good as the other
        return candidates.iter().min().map(|&w| (w, calculate_entropy(w, candidates)));
    }

    let pool = &candidates[..candidates.len().min(ENTROPY_LIMIT)];
    pool.par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, candidates)))
        .max_by(|(w1, e1), (w2, e2)| e1.total_cmp(e2).then_with(|| w2.cmp(w1)))
}

/// Uniformly random candidate
pub fn random_guess<'a, R: Rng + ?Sized>(candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
    candidates.choose(rng).copied()
}

/// How the next guess is picked from the candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Picker {
    /// Highest-entropy candidate (default)
    #[default]
    Entropy,
    /// Uniformly random candidate
    Random,
}

impl Picker {
    /// Look up a picker by CLI name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "entropy" => Some(Self::Entropy),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Pick a guess and report its entropy against `candidates`
    ///
    /// Returns `None` if there are no candidates.
    pub fn pick<'a, R: Rng + ?Sized>(
        self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<(&'a Word, f64)> {
        match self {
            Self::Entropy => best_guess(candidates),
            Self::Random => random_guess(candidates, rng)
                .map(|word| (word, calculate_entropy(word, candidates))),
        }
    }
}

impl std::str::FromStr for Picker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown picker '{s}' (expected entropy or random)"))
    }
}

impl std::fmt::Display for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Entropy => "entropy",
            Self::Random => "random",
        })
    }
}
