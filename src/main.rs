//! Wordle Assistant - CLI
//!
//! Suggests guesses for fixed-length letter puzzles, prunes candidates by
//! the feedback you report, and can play out or benchmark whole games
//! against known secrets.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_assist::{
    MAX_TRIES,
    commands::{analyze_word, run_assist, run_benchmark, solve_secret},
    core::Alphabet,
    output::{print_analysis, print_benchmark_result, print_solve_result},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: duplicate-aware scoring, constraint pruning, and guess recommendation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: one fixed-length word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    wordlist: String,

    /// Trials allowed before a session is lost
    #[arg(short = 't', long, global = true, default_value_t = MAX_TRIES)]
    tries: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): suggests guesses, you type the feedback
    Assist,

    /// Solve a known secret word, feedback computed internally
    Solve {
        /// The secret word to solve
        word: String,

        /// Show per-turn candidate counts and metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report the expected lit squares and pattern entropy of one word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve randomly sampled secrets and report trial statistics
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = Alphabet::default();
    let words = load_from_file(&cli.wordlist, &alphabet)
        .with_context(|| format!("failed to read word list '{}'", cli.wordlist))?;
    if words.is_empty() {
        bail!("word list '{}' contains no usable words", cli.wordlist);
    }

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => {
            run_assist(&words, &alphabet, cli.tries).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let secret = alphabet.encode(&word)?;
            if !words.contains(&secret) {
                bail!("'{word}' is not in the word list");
            }
            let outcome = solve_secret(&secret, &words, cli.tries)?;
            print_solve_result(&outcome, &alphabet, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let report = analyze_word(&word, &words, &alphabet)?;
            print_analysis(&report, &alphabet);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let result = run_benchmark(&words, cli.tries, count);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
