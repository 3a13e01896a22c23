//! Wordle Engine - CLI
//!
//! Word-guessing game with TUI and line modes, plus an assistant that narrows
//! candidates from observed feedback.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_engine::{
    commands::{SolveConfig, check_guess, run_assist, run_benchmark, run_simple, solve_word},
    config::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, SessionConfig},
    core::Word,
    dictionary::Dictionary,
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_check_result, print_solve_result},
    solver::Picker,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Word-guessing game with colored feedback and a candidate-narrowing assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, 5-letter words) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Only accept guesses that are dictionary words
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for secret selection and hints
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How solve and benchmark pick guesses: entropy (default) or random
    #[arg(short = 'p', long, global = true, default_value = "entropy")]
    picker: Picker,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Assistant for a puzzle played elsewhere
    Assist,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Auto-play a known secret with the assistant's suggestions
    Solve {
        /// The secret word to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Auto-play random secrets and report statistics
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Commands {
    /// Interactive modes own the terminal, so their logs only go to a file
    const fn is_interactive(&self) -> bool {
        matches!(self, Self::Play | Self::Simple | Self::Assist)
    }
}

/// Install the global subscriber
///
/// Logs go to `log_file` when given, to stderr when `to_stderr` is set, and
/// nowhere otherwise.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
    } else if to_stderr {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }

    Ok(())
}

/// Load the dictionary named by the -w flag
fn load_dictionary(words: &str, word_length: usize) -> Result<Dictionary> {
    match words {
        "embedded" => {
            if word_length != DEFAULT_WORD_LENGTH {
                bail!(
                    "The embedded dictionary only has {DEFAULT_WORD_LENGTH}-letter words; \
                     pass a word list with --words for length {word_length}"
                );
            }
            Ok(Dictionary::embedded()?)
        }
        path => Dictionary::from_file(path, word_length)
            .with_context(|| format!("Cannot load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), !command.is_interactive())?;

    if let Commands::Check { secret, guess } = &command {
        let feedback = check_guess(secret, guess)?;
        print_check_result(&feedback);
        return Ok(());
    }

    let config = SessionConfig::default()
        .with_word_length(cli.length)
        .with_max_guesses(cli.max_guesses)
        .restrict_to_dictionary(cli.strict);
    config.validate().context("Invalid configuration")?;

    let dictionary = load_dictionary(&cli.words, cli.length)?;
    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    let rng = StdRng::seed_from_u64(seed);

    match command {
        Commands::Play => run_tui(App::new(&dictionary, config, rng)?),
        Commands::Simple => run_simple(&dictionary, config, rng),
        Commands::Assist => run_assist(&dictionary),
        Commands::Solve {
            secret,
            verbose,
            first_word,
        } => {
            let secret = Word::with_length(&secret, config.word_length)
                .with_context(|| format!("Invalid secret '{secret}'"))?;
            let first_guess = first_word
                .map(|word| Word::with_length(&word, config.word_length))
                .transpose()
                .context("Invalid first word")?;
            let solve_config = SolveConfig {
                secret,
                session: config,
                first_guess,
                picker: cli.picker,
            };

            let result = solve_word(solve_config, &dictionary, rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let mut rng = rng;
            let secrets: Vec<Word> = dictionary
                .words()
                .choose_multiple(&mut rng, count)
                .cloned()
                .collect();
            println!("Running benchmark on {} random words...", secrets.len());

            let result = run_benchmark(&dictionary, &secrets, config, cli.picker, seed, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
        // Handled before the dictionary is loaded
        Commands::Check { .. } => Ok(()),
    }
}
