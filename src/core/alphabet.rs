//! Symbol alphabet and numeric word codes
//!
//! Words are handled as fixed-width codes: one index per letter into an
//! ordered alphabet. The alphabet's order never changes during a run, so a
//! code round-trips exactly through `encode`/`decode`.

use crate::core::PuzzleError;
use crate::{ALPHABET_LEN, WORD_LEN};

/// A word as a fixed-width sequence of alphabet indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; WORD_LEN]);

impl Code {
    /// Wrap raw symbol indices
    #[must_use]
    pub fn new(indices: [u8; WORD_LEN]) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < ALPHABET_LEN));
        Self(indices)
    }

    /// The symbol indices, in word order
    #[inline]
    #[must_use]
    pub const fn indices(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Symbol index at a position (0-based)
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrences of one symbol anywhere in the word
    #[must_use]
    pub fn count_of(&self, symbol: u8) -> u8 {
        self.0.iter().filter(|&&s| s == symbol).count() as u8
    }

    /// Occurrence count of every symbol
    #[must_use]
    pub(crate) fn symbol_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &s in &self.0 {
            counts[s as usize] += 1;
        }
        counts
    }
}

/// The ordered set of symbols words are drawn from
///
/// Symbol indices are stable for the lifetime of the process and shared by
/// every component. Canonical case is uppercase; `encode` normalizes.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: [char; ALPHABET_LEN],
}

impl Default for Alphabet {
    /// The standard A–Z alphabet
    fn default() -> Self {
        let mut symbols = ['A'; ALPHABET_LEN];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            *symbol = (b'A' + i as u8) as char;
        }
        Self { symbols }
    }
}

impl Alphabet {
    /// Index of a symbol, case-normalized
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<u8> {
        let ch = ch.to_ascii_uppercase();
        self.symbols.iter().position(|&s| s == ch).map(|i| i as u8)
    }

    /// Symbol at an index
    ///
    /// # Panics
    /// Panics if `index >= ALPHABET_LEN`
    #[must_use]
    pub const fn symbol(&self, index: u8) -> char {
        self.symbols[index as usize]
    }

    /// Map a word to its code
    ///
    /// # Errors
    /// - `LengthMismatch` when the word is not exactly `WORD_LEN` symbols
    /// - `UnknownSymbol` when a character is outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Alphabet;
    ///
    /// let alphabet = Alphabet::default();
    /// let code = alphabet.encode("crane").unwrap();
    /// assert_eq!(alphabet.decode(&code), "CRANE");
    /// ```
    pub fn encode(&self, word: &str) -> Result<Code, PuzzleError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(PuzzleError::LengthMismatch {
                expected: WORD_LEN,
                found: chars.len(),
            });
        }

        let mut indices = [0u8; WORD_LEN];
        for (slot, ch) in indices.iter_mut().zip(chars) {
            *slot = self
                .index_of(ch)
                .ok_or(PuzzleError::UnknownSymbol(ch))?;
        }
        Ok(Code(indices))
    }

    /// Map a code back to its word, in canonical case
    #[must_use]
    pub fn decode(&self, code: &Code) -> String {
        code.indices().iter().map(|&i| self.symbol(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let alphabet = Alphabet::default();
        for word in ["CRANE", "ARENA", "ABBEY", "ZZZZZ", "AAAAA"] {
            let code = alphabet.encode(word).unwrap();
            assert_eq!(alphabet.decode(&code), word);
        }
    }

    #[test]
    fn encode_normalizes_case() {
        let alphabet = Alphabet::default();
        let lower = alphabet.encode("crane").unwrap();
        let upper = alphabet.encode("CRANE").unwrap();
        let mixed = alphabet.encode("CrAnE").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(alphabet.decode(&lower), "CRANE");
    }

    #[test]
    fn encode_rejects_wrong_length() {
        let alphabet = Alphabet::default();
        assert_eq!(
            alphabet.encode("toolong"),
            Err(PuzzleError::LengthMismatch {
                expected: 5,
                found: 7
            })
        );
        assert_eq!(
            alphabet.encode(""),
            Err(PuzzleError::LengthMismatch {
                expected: 5,
                found: 0
            })
        );
    }

    #[test]
    fn encode_rejects_unknown_symbols() {
        let alphabet = Alphabet::default();
        assert_eq!(
            alphabet.encode("cran3"),
            Err(PuzzleError::UnknownSymbol('3'))
        );
        assert_eq!(
            alphabet.encode("cra n"),
            Err(PuzzleError::UnknownSymbol(' '))
        );
    }

    #[test]
    fn indices_match_alphabet_order() {
        let alphabet = Alphabet::default();
        let code = alphabet.encode("ABCDE").unwrap();
        assert_eq!(code.indices(), &[0, 1, 2, 3, 4]);
        assert_eq!(code.at(0), 0);
        assert_eq!(code.at(4), 4);
    }

    #[test]
    fn count_of_duplicates() {
        let alphabet = Alphabet::default();
        let code = alphabet.encode("ARENA").unwrap();
        let a = alphabet.index_of('A').unwrap();
        let e = alphabet.index_of('E').unwrap();
        let z = alphabet.index_of('Z').unwrap();

        assert_eq!(code.count_of(a), 2);
        assert_eq!(code.count_of(e), 1);
        assert_eq!(code.count_of(z), 0);
    }

    #[test]
    fn symbol_counts_sum_to_word_len() {
        let alphabet = Alphabet::default();
        let code = alphabet.encode("SPEED").unwrap();
        let counts = code.symbol_counts();

        assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), 5);
        assert_eq!(counts[alphabet.index_of('E').unwrap() as usize], 2);
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.index_of('a'), Some(0));
        assert_eq!(alphabet.index_of('A'), Some(0));
        assert_eq!(alphabet.index_of('z'), Some(25));
        assert_eq!(alphabet.index_of('!'), None);
    }
}
