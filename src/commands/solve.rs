//! Known-secret solving
//!
//! Plays a full session against a known secret, the scorer standing in
//! for the puzzle's feedback.

use crate::core::{Code, Feedback, PuzzleError};
use crate::session::{PuzzleSession, SessionStatus};
use crate::solver::{self, entropy::pattern_entropy};

/// One turn of an automated solve
#[derive(Debug)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    pub expected_correct: f64,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving one secret
#[derive(Debug)]
pub struct SolveOutcome {
    pub secret: Code,
    pub won: bool,
    pub turns: Vec<Turn>,
}

/// Solve a known secret: recommend, score, record, repeat
///
/// # Errors
///
/// `EmptyPool` if the candidate set empties before the session settles.
/// With a truthful scorer that means the secret was never in the list.
pub fn solve_secret(
    secret: &Code,
    words: &[Code],
    max_tries: usize,
) -> Result<SolveOutcome, PuzzleError> {
    let mut session = PuzzleSession::new(words.to_vec(), max_tries);
    let mut turns = Vec::new();

    while session.status() == SessionStatus::InProgress {
        let candidates_before = session.candidates().len();
        let (guess, expected) = session.recommend()?;
        let entropy = pattern_entropy(&guess, session.candidates());

        let feedback = solver::score(&guess, secret);
        session.record(guess, feedback)?;

        turns.push(Turn {
            guess,
            feedback,
            expected_correct: expected,
            entropy,
            candidates_before,
            candidates_after: session.candidates().len(),
        });
    }

    Ok(SolveOutcome {
        secret: *secret,
        won: session.status() == SessionStatus::Won,
        turns,
    })
}
