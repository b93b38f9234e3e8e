//! Pattern entropy
//!
//! A second lens on guess quality: the Shannon entropy of the feedback
//! partition a guess induces on the candidates. Reported alongside the
//! expected lit count; the recommender never ranks by it.

use super::score::score_all;
use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Shannon entropy, in bits, of the feedback patterns a guess produces
/// across the candidates
///
/// H = -Σ p·log₂(p) over the pattern distribution: zero when every
/// candidate reacts identically, log₂(n) when all n react differently.
#[must_use]
pub fn pattern_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for feedback in score_all(guess, candidates) {
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn code(word: &str) -> Code {
        Alphabet::default().encode(word).unwrap()
    }

    fn codes(words: &[&str]) -> Vec<Code> {
        words.iter().map(|w| code(w)).collect()
    }

    #[test]
    fn identical_reactions_carry_no_information() {
        // ZZZZZ misses every candidate the same way
        let candidates = codes(&["AAAAA", "BBBBB", "CCCCC"]);
        let entropy = pattern_entropy(&code("ZZZZZ"), &candidates);
        assert!(entropy.abs() < 1e-9);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        // SLATE matches itself fully and misses ZZZZZ fully: two equally
        // likely patterns
        let candidates = codes(&["SLATE", "ZZZZZ"]);
        let entropy = pattern_entropy(&code("SLATE"), &candidates);
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bounded_by_log2_of_candidate_count() {
        let candidates = codes(&["ARENA", "ARISE", "AGREE", "ERASE"]);
        let entropy = pattern_entropy(&code("CRANE"), &candidates);

        assert!(entropy >= 0.0);
        assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn empty_candidates_score_zero() {
        assert!((pattern_entropy(&code("CRANE"), &[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn diverse_guess_beats_monotone_guess() {
        let candidates = codes(&["SLATE", "IRATE", "CRATE", "GRATE"]);

        let diverse = pattern_entropy(&code("TRACE"), &candidates);
        let monotone = pattern_entropy(&code("QQQQQ"), &candidates);
        assert!(diverse > monotone);
    }
}
