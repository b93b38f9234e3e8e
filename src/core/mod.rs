//! Core domain types
//!
//! The alphabet and its numeric word codes, per-position feedback, and the
//! error taxonomy shared by every component. Everything here is pure and
//! has no dependencies outside the standard library.

mod alphabet;
mod error;
mod feedback;

pub use alphabet::{Alphabet, Code};
pub use error::PuzzleError;
pub use feedback::{Feedback, Outcome};
