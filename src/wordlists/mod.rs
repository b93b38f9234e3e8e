//! Word lists
//!
//! The dictionary is a runtime input: one word per line, all the fixed
//! length, drawn from the alphabet. The loader validates and de-duplicates
//! so the core only ever sees well-formed codes.

pub mod loader;
