//! Benchmark command
//!
//! Solves a sample of secrets end to end and reports trial statistics.

use super::solve::solve_secret;
use crate::core::Code;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_trials: usize,
    pub average_trials: f64,
    pub min_trials: usize,
    pub max_trials: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve `count` randomly sampled secrets from the word list
///
/// Secrets are drawn from the list itself, so every run plays out to a
/// win or a loss rather than an inconsistency.
#[must_use]
pub fn run_benchmark(words: &[Code], max_tries: usize, count: usize) -> BenchmarkResult {
    let mut rng = rand::rng();
    let targets: Vec<Code> = words
        .choose_multiple(&mut rng, count.min(words.len()))
        .copied()
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_trials = 0;
    let mut min_trials = usize::MAX;
    let mut max_trials = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in &targets {
        // Targets come from the list, so the pools cannot empty
        if let Ok(outcome) = solve_secret(target, words, max_tries) {
            let trials = outcome.turns.len();
            total_trials += trials;
            min_trials = min_trials.min(trials);
            max_trials = max_trials.max(trials);
            *distribution.entry(trials).or_insert(0) += 1;
            if outcome.won {
                solved += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_trials,
        average_trials: if total_words == 0 {
            0.0
        } else {
            total_trials as f64 / total_words as f64
        },
        min_trials: if total_words == 0 { 0 } else { min_trials },
        max_trials,
        distribution,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
