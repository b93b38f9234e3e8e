//! Display functions for session state and command results

use super::formatters::{feedback_row, score_bar, unset_row};
use crate::commands::{BenchmarkResult, SolveOutcome, WordReport};
use crate::core::{Alphabet, Code};
use crate::session::PuzzleSession;
use colored::Colorize;

/// Render the session grid
///
/// Played rows are colored per outcome; the remaining rows print blank.
pub fn print_grid(session: &PuzzleSession, alphabet: &Alphabet) {
    println!();
    for row in 0..session.max_tries() {
        match session.trials().get(row) {
            Some(trial) => {
                let word = alphabet.decode(&trial.guess);
                println!("  {}", feedback_row(&word, &trial.feedback));
            }
            None => println!("  {}", unset_row()),
        }
    }
    println!();
}

/// Print a recommendation the way the assistant reports it
pub fn print_recommendation(
    guess: &Code,
    expected_correct: f64,
    entropy: f64,
    remaining: usize,
    alphabet: &Alphabet,
) {
    let word = alphabet.decode(guess);
    println!(
        "I think that the best candidate is {}",
        word.as_str().bright_yellow().bold()
    );
    println!("Expect {expected_correct:.2} lit squares if you guess {word}");
    println!("Pattern entropy: {entropy:.3} bits");
    println!("Before guessing {word}, there are {remaining} remaining candidates");
}

/// Print the result of solving a known secret
pub fn print_solve_result(outcome: &SolveOutcome, alphabet: &Alphabet, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        alphabet.decode(&outcome.secret).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in outcome.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            alphabet.decode(&turn.guess),
            turn.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            println!("  Expected lit: {:.2}", turn.expected_correct);
            println!("  Entropy:      {:.3} bits", turn.entropy);
        }
    }

    println!();
    if outcome.won {
        println!(
            "{}",
            format!("Solved in {} trials!", outcome.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} trials", outcome.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis(report: &WordReport, alphabet: &Alphabet) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        alphabet.decode(&report.word).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = score_bar(report.expected_correct, 30);

    println!("\nAgainst {} candidates:", report.candidates);
    println!(
        "   Expected lit: [{}] {}",
        bar.green(),
        format!("{:.2} squares", report.expected_correct).bright_yellow()
    );
    println!("   Entropy:      {:.3} bits", report.entropy);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average trials:   {}",
        format!("{:.2}", result.average_trials)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_trials).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_trials).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for trial_count in 1..=result.max_trials.max(1) {
        if let Some(&count) = result.distribution.get(&trial_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {trial_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
