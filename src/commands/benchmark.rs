//! Benchmark command
//!
//! Auto-plays many secrets in parallel and summarizes how the assistant did.

use super::solve::{SolveConfig, solve_word};
use crate::config::SessionConfig;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{Picker, best_guess};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    /// Average over won games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess limit the games were played with
    pub max_allowed: usize,
    /// Won games keyed by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Auto-play every secret and collect statistics
///
/// Games run in parallel, each with an RNG seeded from `seed` and its index.
/// With the entropy picker the opening guess is ranked once against the whole
/// dictionary and reused.
///
/// # Errors
///
/// Returns an error if a secret is not a dictionary word or the configuration
/// does not fit the dictionary.
pub fn run_benchmark(
    dictionary: &Dictionary,
    secrets: &[Word],
    session: SessionConfig,
    picker: Picker,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let opener = match picker {
        Picker::Entropy => {
            let all: Vec<&Word> = dictionary.iter().collect();
            best_guess(&all).map(|(word, _)| word.clone())
        }
        Picker::Random => None,
    };
    info!(games = secrets.len(), %picker, opener = ?opener, "benchmark started");

    let pb = progress_bar(secrets.len(), show_progress);

    let outcomes: Vec<(Word, bool, usize)> = secrets
        .par_iter()
        .enumerate()
        .map(|(idx, secret)| -> Result<(Word, bool, usize)> {
            let config = SolveConfig {
                secret: secret.clone(),
                session,
                first_guess: opener.clone(),
                picker,
            };
            let rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
            let result = solve_word(config, dictionary, rng)?;
            pb.inc(1);
            Ok((result.secret, result.success, result.guesses.len()))
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_games = outcomes.len();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    for (secret, success, guesses) in outcomes {
        if success {
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(secret);
        }
    }

    let wins: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(g, count)| g * count).sum();

    Ok(BenchmarkResult {
        total_games,
        wins,
        average_guesses: if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        max_allowed: session.max_guesses,
        distribution,
        failures,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(5, &WORDS[..150]).unwrap()
    }

    fn run(dictionary: &Dictionary, secrets: &[Word]) -> BenchmarkResult {
        run_benchmark(dictionary, secrets, SessionConfig::default(), Picker::Entropy, 1, false)
            .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = dictionary();
        let secrets = dictionary.words()[..10].to_vec();

        let result = run(&dictionary, &secrets);

        assert_eq!(result.total_games, 10);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert_eq!(result.max_allowed, 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = dictionary();
        let secrets = dictionary.words()[..10].to_vec();

        let result = run(&dictionary, &secrets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum + result.failures.len(), result.total_games);
        assert_eq!(distribution_sum, result.wins);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let dictionary = dictionary();
        let result = run(&dictionary, &[]);

        assert_eq!(result.total_games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dictionary = dictionary();
        let secrets = dictionary.words()[20..30].to_vec();

        let result = run(&dictionary, &secrets);

        if result.wins > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_rejects_unknown_secret() {
        let dictionary = dictionary();
        let secrets = vec![Word::new("zzzzz").unwrap()];

        let result = run_benchmark(
            &dictionary,
            &secrets,
            SessionConfig::default(),
            Picker::Entropy,
            1,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn benchmark_with_random_picker_is_seeded() {
        let dictionary = dictionary();
        let secrets = dictionary.words()[40..48].to_vec();
        let config = SessionConfig::default().with_max_guesses(40);
        let bench = || {
            run_benchmark(&dictionary, &secrets, config, Picker::Random, 9, false).unwrap()
        };

        let first = bench();
        let second = bench();

        assert_eq!(first.total_games, 8);
        assert_eq!(first.wins, 8);
        assert_eq!(first.distribution, second.distribution);
    }
}
