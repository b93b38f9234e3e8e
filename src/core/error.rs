//! Error taxonomy
//!
//! Every failure surfaced by the library is local to the failing call:
//! no session or candidate state changes when one of these is returned.

use std::fmt;

/// Errors surfaced by encoding, constraint combination, recommendation,
/// and session calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// A character outside the alphabet was encountered
    UnknownSymbol(char),
    /// A word or feedback string of the wrong length was passed
    LengthMismatch { expected: usize, found: usize },
    /// Two constraints disagree on a fixed letter, or bound a letter's
    /// occurrence count to an empty range
    ConstraintConflict { position: Option<usize> },
    /// The recommender was called with no guesses or no candidates
    EmptyPool,
    /// `record` was called on a session that already won or lost
    SessionTerminated,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(ch) => write!(f, "character '{ch}' is not in the alphabet"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected exactly {expected} symbols, got {found}")
            }
            Self::ConstraintConflict {
                position: Some(pos),
            } => {
                write!(f, "constraints disagree on the letter fixed at position {pos}")
            }
            Self::ConstraintConflict { position: None } => {
                write!(f, "constraints bound a letter count to an empty range")
            }
            Self::EmptyPool => write!(f, "cannot recommend from an empty pool"),
            Self::SessionTerminated => write!(f, "session is already finished"),
        }
    }
}

impl std::error::Error for PuzzleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_problem() {
        assert_eq!(
            PuzzleError::UnknownSymbol('!').to_string(),
            "character '!' is not in the alphabet"
        );
        assert_eq!(
            PuzzleError::LengthMismatch {
                expected: 5,
                found: 7
            }
            .to_string(),
            "expected exactly 5 symbols, got 7"
        );
        assert!(
            PuzzleError::ConstraintConflict { position: Some(2) }
                .to_string()
                .contains("position 2")
        );
    }

    #[test]
    fn error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&PuzzleError::EmptyPool);
    }
}
