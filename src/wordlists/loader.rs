//! Word list loading utilities

use crate::core::{Alphabet, Code};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load and encode a word list from a file
///
/// One word per line. Blank lines and entries that fail to encode (wrong
/// length, out-of-alphabet characters) are skipped rather than fatal.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::core::Alphabet;
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let alphabet = Alphabet::default();
/// let words = load_from_file("data/words.txt", &alphabet).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> io::Result<Vec<Code>> {
    let content = fs::read_to_string(path)?;
    Ok(codes_from_lines(content.lines(), alphabet))
}

/// Encode an iterator of words, skipping invalid entries and duplicates
///
/// Duplicates keep their first position, so downstream iteration order
/// (and therefore recommendation tie-breaks) stays reproducible.
pub fn codes_from_lines<'a, I>(lines: I, alphabet: &Alphabet) -> Vec<Code>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                alphabet.encode(trimmed).ok()
            }
        })
        .filter(|code| seen.insert(*code))
        .collect()
}
