//! Formatting utilities for terminal output

use crate::WORD_LEN;
use crate::core::{Feedback, Outcome};
use colored::Colorize;

/// Render one grid cell: the letter on its outcome's color
#[must_use]
pub fn feedback_cell(letter: char, outcome: Outcome) -> String {
    let cell = format!(" {letter} ");
    match outcome {
        Outcome::Correct => cell.black().on_green().to_string(),
        Outcome::Misplaced => cell.black().on_yellow().to_string(),
        Outcome::Absent => cell.white().on_bright_black().to_string(),
        Outcome::Unset => cell.bright_black().to_string(),
    }
}

/// Render one grid row from a word and its feedback
#[must_use]
pub fn feedback_row(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.outcomes())
        .map(|(letter, &outcome)| feedback_cell(letter, outcome))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an unplayed grid row
#[must_use]
pub fn unset_row() -> String {
    feedback_row(&"·".repeat(WORD_LEN), &Feedback::UNSET)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an expected-lit score as a bar out of the word length
#[must_use]
pub fn score_bar(expected_correct: f64, width: usize) -> String {
    create_progress_bar(expected_correct, WORD_LEN as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_scales_to_word_length() {
        let bar = score_bar(5.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn feedback_row_has_one_cell_per_letter() {
        let feedback = Feedback::parse("G-Y--").unwrap();
        let row = feedback_row("CRANE", &feedback);

        // Five cells joined by four separating spaces
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(row.contains(letter));
        }
    }
}
