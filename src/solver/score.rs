//! Guess scoring
//!
//! `score` computes per-position feedback with the duplicate-letter rule:
//! exact matches consume secret occurrences first, then the leftmost
//! unmatched occurrences of a letter take whatever Misplaced grants remain.
//! This is the hot loop of the whole system, since `best_guess` calls it
//! for every (guess, candidate) pair, so it works entirely in stack arrays.

use crate::core::{Code, Feedback, Outcome};
use crate::{ALPHABET_LEN, WORD_LEN};

/// Score one guess against one secret
///
/// Two passes. The first marks Correct positions and tallies the secret
/// letters they did not consume. The second walks the remaining positions
/// left to right, granting Misplaced while that tally holds out; everything
/// else stays Absent. Later duplicates therefore lose to earlier ones,
/// deterministically.
///
/// # Examples
/// ```
/// use wordle_assist::core::Alphabet;
/// use wordle_assist::solver::score;
///
/// let alphabet = Alphabet::default();
/// let guess = alphabet.encode("abbey").unwrap();
/// let secret = alphabet.encode("arena").unwrap();
///
/// assert_eq!(score(&guess, &secret).to_string(), "G--Y-");
/// ```
#[must_use]
pub fn score(guess: &Code, secret: &Code) -> Feedback {
    let mut outcomes = [Outcome::Absent; WORD_LEN];
    // Secret occurrences not consumed by an exact match
    let mut remaining = [0u8; ALPHABET_LEN];

    // Allow: index needed to compare guess[i] with secret[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.at(i) == secret.at(i) {
            outcomes[i] = Outcome::Correct;
        } else {
            remaining[secret.at(i) as usize] += 1;
        }
    }

    // Leftmost unmatched occurrences win the Misplaced grants
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if outcomes[i] != Outcome::Correct {
            let symbol = guess.at(i) as usize;
            if remaining[symbol] > 0 {
                outcomes[i] = Outcome::Misplaced;
                remaining[symbol] -= 1;
            }
        }
    }

    Feedback::new(outcomes)
}

/// Score one guess against every secret in a batch
///
/// Element-wise `score`; entries are independent, so callers may split the
/// batch across threads and concatenate in order.
#[must_use]
pub fn score_all(guess: &Code, secrets: &[Code]) -> Vec<Feedback> {
    secrets.iter().map(|secret| score(guess, secret)).collect()
}

/// Average number of Correct squares a guess earns across the candidates
///
/// The recommendation metric: a guess that places many letters on average
/// discriminates well among the remaining candidates. Reported to users as
/// the expected lit count for a suggestion.
#[must_use]
pub fn expected_correct(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total: usize = candidates
        .iter()
        .map(|candidate| score(guess, candidate).correct_count())
        .sum();
    total as f64 / candidates.len() as f64
}
