//! Word analysis command
//!
//! Reports how informative one word would be as the next guess.

use crate::core::{Alphabet, Code, PuzzleError};
use crate::solver::entropy::pattern_entropy;
use crate::solver::expected_correct;

/// Result of analyzing a word
pub struct WordReport {
    pub word: Code,
    pub expected_correct: f64,
    pub entropy: f64,
    pub candidates: usize,
}

/// Analyze a word against a candidate list
///
/// The word does not have to be in the list; any encodable word can be
/// probed.
///
/// # Errors
///
/// `LengthMismatch` or `UnknownSymbol` when the word does not encode.
pub fn analyze_word(
    word: &str,
    candidates: &[Code],
    alphabet: &Alphabet,
) -> Result<WordReport, PuzzleError> {
    let code = alphabet.encode(word)?;

    Ok(WordReport {
        word: code,
        expected_correct: expected_correct(&code, candidates),
        entropy: pattern_entropy(&code, candidates),
        candidates: candidates.len(),
    })
}
