//! Display functions for command results

use super::formatters::{feedback_tiles, feedback_to_emoji, keyboard_rows};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Feedback;
use crate::keyboard::KeyboardState;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking one guess against a secret
pub fn print_check_result(feedback: &Feedback) {
    println!("\n{}", feedback_tiles(feedback));
    println!("{}", feedback_to_emoji(feedback));
    println!("{feedback}");
}

/// Write the on-screen keyboard, one indented row per line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_keyboard<O: Write>(state: &KeyboardState, out: &mut O) -> io::Result<()> {
    for row in keyboard_rows(state) {
        writeln!(out, "  {row}")?;
    }
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            feedback_tiles(&step.feedback),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.failures.is_empty() {
        let failed: Vec<&str> = result.failures.iter().take(10).map(|w| w.text()).collect();
        println!("   Unsolved:         {}", failed.join(", ").red());
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_allowed {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
