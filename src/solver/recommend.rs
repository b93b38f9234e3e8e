//! Guess recommendation
//!
//! Brute-force search: score every guess in the pool against every
//! candidate and keep the guess with the highest expected lit count. At
//! O(guesses × candidates × letters) this dominates the system's runtime,
//! so the per-guess scores run on the rayon thread pool.

use super::score::expected_correct;
use crate::core::{Code, PuzzleError};
use rayon::prelude::*;

/// Pick the guess with the highest expected Correct count
///
/// Ties break toward the earliest guess in pool order. The reduction
/// compares (score, index) pairs, so the winner is identical for any
/// parallel split of the pool.
///
/// # Errors
/// `EmptyPool` when either pool is empty.
///
/// # Examples
/// ```
/// use wordle_assist::core::Alphabet;
/// use wordle_assist::solver::best_guess;
///
/// let alphabet = Alphabet::default();
/// let pool = vec![
///     alphabet.encode("ABCDE").unwrap(),
///     alphabet.encode("EDCBA").unwrap(),
/// ];
///
/// let (best, score) = best_guess(&pool, &pool).unwrap();
/// assert_eq!(alphabet.decode(&best), "ABCDE");
/// assert!((score - 3.0).abs() < f64::EPSILON);
/// ```
pub fn best_guess(guess_pool: &[Code], candidates: &[Code]) -> Result<(Code, f64), PuzzleError> {
    if guess_pool.is_empty() || candidates.is_empty() {
        return Err(PuzzleError::EmptyPool);
    }

    let (index, score) = guess_pool
        .par_iter()
        .enumerate()
        .map(|(i, guess)| (i, expected_correct(guess, candidates)))
        .reduce(
            || (usize::MAX, f64::NEG_INFINITY),
            |best, next| {
                if next.1 > best.1 || (next.1 == best.1 && next.0 < best.0) {
                    next
                } else {
                    best
                }
            },
        );

    Ok((guess_pool[index], score))
}
