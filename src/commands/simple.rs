//! Simple game mode
//!
//! Line-based game without the TUI: the player guesses a hidden word and sees
//! colored tiles and the keyboard after each guess.

use super::input::{is_yes, read_line};
use crate::config::SessionConfig;
use crate::dictionary::Dictionary;
use crate::output::formatters::{attempts_bar, feedback_tiles};
use crate::output::print_keyboard;
use crate::session::{GameState, GuessSession};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the configuration does not fit the dictionary or on an
/// I/O error.
pub fn run_simple<R: Rng>(dictionary: &Dictionary, config: SessionConfig, rng: R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(dictionary, config, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple game on arbitrary line input and output
///
/// # Errors
///
/// Returns an error if the configuration does not fit the dictionary or on an
/// I/O error.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_lines<R: Rng, I: BufRead, O: Write>(
    dictionary: &Dictionary,
    config: SessionConfig,
    rng: R,
    input: &mut I,
    out: &mut O,
) -> Result<()> {
    let mut session = GuessSession::new(config, dictionary, rng)?;

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  Guess the {}-letter word in {} tries",
        config.word_length, config.max_guesses
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "Commands: 'hint' reveals a letter, 'new' starts over, 'quit' exits\n")?;

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.history().len() + 1,
            config.max_guesses
        );
        let Some(line) = read_line(&prompt, input, out)? else {
            return Ok(());
        };

        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 The word was {}\n", session.secret())?;
                return Ok(());
            }
            "new" => {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            "hint" => {
                match session.reveal_hint() {
                    Some(letter) => writeln!(
                        out,
                        "💡 The word contains {}",
                        char::from(letter).to_string().green().bold()
                    )?,
                    None => writeln!(out, "Every letter of the word is already green")?,
                }
                print_keyboard(session.keyboard(), out)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        match session.submit_guess(&line) {
            Ok(feedback) => {
                let tiles = feedback_tiles(feedback);
                writeln!(out, "\n  {tiles}")?;
            }
            Err(err) => {
                writeln!(out, "{} {err}", "❌".red())?;
                continue;
            }
        }

        print_keyboard(session.keyboard(), out)?;
        writeln!(
            out,
            "  Attempts: {} {}\n",
            attempts_bar(session.attempts_remaining(), config.max_guesses),
            session.attempts_remaining()
        )?;

        match session.state() {
            GameState::InProgress => continue,
            GameState::Won => {
                let guesses = session.history().len();
                writeln!(
                    out,
                    "{}",
                    format!(
                        "🎉 Solved in {guesses} {}!",
                        if guesses == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            GameState::Lost => {
                writeln!(
                    out,
                    "{} {}",
                    "Out of guesses. The word was".red(),
                    session.secret().text().bright_yellow().bold()
                )?;
            }
        }

        for feedback in session.history() {
            writeln!(out, "  {}", feedback.to_emoji())?;
        }

        let answer = read_line("Play again? (yes/no)", input, out)?;
        if !is_yes(answer.as_deref()) {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
        session.reset();
        writeln!(out, "\n🔄 New game started!\n")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(words: &[&str], max_guesses: usize, script: &str) -> String {
        colored::control::set_override(false);
        let dictionary = Dictionary::from_strs(5, words).unwrap();
        let config = SessionConfig::default().with_max_guesses(max_guesses);
        let mut input = script.as_bytes();
        let mut out = Vec::new();

        play_lines(&dictionary, config, StdRng::seed_from_u64(3), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_game() {
        let out = play(&["crane"], 6, "slate\ncrane\nno\n");

        assert!(out.contains(" S  L  A  T  E "));
        assert!(out.contains("Solved in 2 guesses!"));
        assert!(out.contains("🟩🟩🟩🟩🟩"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let out = play(&["crane"], 1, "slate\nno\n");

        assert!(out.contains("Out of guesses. The word was CRANE"));
    }

    #[test]
    fn invalid_guess_is_reported_and_retried() {
        let out = play(&["crane"], 6, "cat\ncr4ne\ncrane\nno\n");

        assert!(out.contains("❌"));
        assert!(out.contains("Solved in 1 guess!"));
    }

    #[test]
    fn hint_reveals_a_secret_letter() {
        let out = play(&["crane"], 6, "hint\nquit\n");

        assert!(out.contains("The word contains "));
        assert!(out.contains("The word was CRANE"));
    }

    #[test]
    fn new_game_restarts_attempts() {
        let out = play(&["crane"], 6, "slate\nnew\ncrane\nno\n");

        assert!(out.contains("New game started!"));
        assert!(out.contains("Solved in 1 guess!"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let out = play(&["crane"], 6, "slate\n");
        assert!(out.contains("Guess 2/6"));
    }
}
