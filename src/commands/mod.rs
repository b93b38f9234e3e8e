//! Command implementations
//!
//! Session drivers for the CLI: the interactive assistant, the
//! known-secret solver, single-word analysis, and the benchmark sweep.

mod analyze;
mod assist;
mod benchmark;
mod solve;

pub use analyze::{WordReport, analyze_word};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveOutcome, Turn, solve_secret};
