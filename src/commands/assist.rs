//! Text-mode assistant
//!
//! The player plays a puzzle elsewhere and types back the feedback they got.
//! After each entry the assistant shows what is still possible and suggests
//! the next guess.

use super::input::{is_yes, read_line};
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{CandidateFilter, best_guess, calculate_metrics};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed by name once the set is this small
const LIST_LIMIT: usize = 10;

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error on an I/O error.
pub fn run_assist(dictionary: &Dictionary) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    assist_lines(dictionary, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the assistant on arbitrary line input and output
///
/// # Errors
///
/// Returns an error on an I/O error.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn assist_lines<I: BufRead, O: Write>(
    dictionary: &Dictionary,
    input: &mut I,
    out: &mut O,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  Puzzle assistant")?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "After each guess, enter the feedback one letter at a time:")?;
    writeln!(out, "  F.R L.R O.Y O.G D.R   (R = not in word, Y = elsewhere, G = right spot)")?;
    writeln!(out, "Commands: 'win' when solved, 'undo', 'new', 'quit'\n")?;

    let mut filter = CandidateFilter::new(dictionary.word_length());
    let mut candidates = filter.candidates(dictionary);
    let mut contradiction = false;

    loop {
        if !contradiction {
            show_candidates(&candidates, filter.len() + 1, out)?;
        }

        let Some(line) = read_line("Feedback", input, out)? else {
            return Ok(());
        };

        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                filter.reset();
                candidates = filter.candidates(dictionary);
                contradiction = false;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "undo" => {
                if let Some((guess, _)) = filter.undo() {
                    candidates = filter.candidates(dictionary);
                    contradiction = false;
                    writeln!(out, "✓ Removed {guess}\n")?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            "win" => {
                if !finish(filter.len() + 1, input, out)? {
                    return Ok(());
                }
                filter.reset();
                candidates = filter.candidates(dictionary);
                contradiction = false;
            }
            "" => {}
            _ => match filter.record_text(&line) {
                Ok(feedback) if feedback.is_perfect() => {
                    if !finish(filter.len(), input, out)? {
                        return Ok(());
                    }
                    filter.reset();
                    candidates = filter.candidates(dictionary);
                    contradiction = false;
                }
                Ok(_) => match filter.check_candidates(dictionary) {
                    Ok(remaining) => {
                        candidates = remaining;
                        contradiction = false;
                    }
                    Err(err) => {
                        candidates.clear();
                        contradiction = true;
                        writeln!(out, "\n{} {err}", "⚠".yellow().bold())?;
                        writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                    }
                },
                Err(err) => {
                    writeln!(out, "{} {err}\n", "❌".red())?;
                }
            },
        }
    }
}

fn show_candidates<O: Write>(candidates: &[&Word], turn: usize, out: &mut O) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "Turn {turn}: {} candidates remaining", candidates.len())?;
    writeln!(out, "{}", "─".repeat(60))?;

    if let Some((suggestion, entropy)) = best_guess(candidates) {
        let metrics = calculate_metrics(suggestion, candidates);
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            suggestion.text().bright_yellow().bold()
        )?;
        writeln!(out, "   Entropy:          {entropy:.3} bits")?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(
            out,
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        )?;
    }

    if candidates.len() <= LIST_LIMIT {
        writeln!(out, "Remaining candidates:")?;
        for candidate in candidates {
            writeln!(out, "  • {candidate}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Celebrate and ask about another round; `true` to keep going
fn finish<I: BufRead, O: Write>(guesses: usize, input: &mut I, out: &mut O) -> Result<bool> {
    writeln!(
        out,
        "\n{}",
        format!(
            "🎉 Solved in {guesses} {}!",
            if guesses == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;

    let answer = read_line("Play again? (yes/no)", input, out)?;
    if is_yes(answer.as_deref()) {
        writeln!(out, "\n🔄 New game started!\n")?;
        Ok(true)
    } else {
        writeln!(out, "\n👋 Thanks for playing!\n")?;
        Ok(false)
    }
}
