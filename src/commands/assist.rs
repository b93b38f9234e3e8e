//! Interactive assistant
//!
//! Drives a session against feedback typed in by the player: suggest a
//! guess, read the pattern the puzzle showed, prune, repeat. The player
//! may play a different word than the suggestion by entering both the
//! word and its pattern.

use crate::core::{Alphabet, Code, Feedback, PuzzleError};
use crate::output::{print_grid, print_recommendation};
use crate::session::{PuzzleSession, SessionStatus};
use crate::solver::entropy::pattern_entropy;
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_assist(words: &[Code], alphabet: &Alphabet, max_tries: usize) -> Result<(), String> {
    println!("\nI'll suggest guesses; after each one, tell me what the puzzle showed:");
    println!("  - G for green (right letter, right place)");
    println!("  - Y for yellow (right letter, wrong place)");
    println!("  - '-' for gray (letter not in the word)\n");
    println!("Enter 'WORD PATTERN' if you played something else, 'win' when solved,");
    println!("'drop WORD' to discard a stale candidate, 'new' to restart, 'quit' to exit.\n");

    let mut session = PuzzleSession::new(words.to_vec(), max_tries);

    loop {
        print_grid(&session, alphabet);

        match session.status() {
            SessionStatus::Won => {
                println!("\nSolved in {} trials!\n", session.trial_count());
                if !ask_again()? {
                    return Ok(());
                }
                session = PuzzleSession::new(words.to_vec(), max_tries);
                continue;
            }
            SessionStatus::Lost => {
                println!("\nOut of trials.\n");
                if !ask_again()? {
                    return Ok(());
                }
                session = PuzzleSession::new(words.to_vec(), max_tries);
                continue;
            }
            SessionStatus::InProgress => {}
        }

        let suggestion = match session.recommend() {
            Ok((guess, expected)) => {
                let entropy = pattern_entropy(&guess, session.candidates());
                print_recommendation(
                    &guess,
                    expected,
                    entropy,
                    session.candidates().len(),
                    alphabet,
                );
                if session.candidates().len() <= 10 {
                    println!("Remaining candidates are:");
                    for candidate in session.candidates() {
                        println!("\t{}", alphabet.decode(candidate));
                    }
                }
                Some(guess)
            }
            Err(PuzzleError::EmptyPool) => {
                println!("No candidates remain; some feedback must have been wrong.");
                println!("Type 'new' to start over or 'quit' to exit.");
                None
            }
            Err(e) => return Err(e.to_string()),
        };

        let input = get_user_input("Feedback")?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("Bye!");
                return Ok(());
            }
            "new" | "n" => {
                session = PuzzleSession::new(words.to_vec(), max_tries);
                continue;
            }
            _ => {}
        }

        if let Some(word) = input.strip_prefix("drop ").or_else(|| input.strip_prefix("DROP ")) {
            match alphabet.encode(word.trim()) {
                Ok(code) => {
                    session.blacklist(&code);
                    println!("Removing '{}' from the list of candidates", alphabet.decode(&code));
                }
                Err(e) => println!("Cannot drop '{}': {e}", word.trim()),
            }
            continue;
        }

        match parse_trial(&input, suggestion.as_ref(), alphabet) {
            Ok((guess, feedback)) => {
                if let Err(e) = session.record(guess, feedback) {
                    println!("{e}");
                }
            }
            Err(message) => println!("{message}"),
        }
    }
}

/// Parse a trial entry: a bare pattern (scored against the suggestion),
/// `WORD PATTERN`, or `win`
fn parse_trial(
    input: &str,
    suggestion: Option<&Code>,
    alphabet: &Alphabet,
) -> Result<(Code, Feedback), String> {
    let mut parts = input.split_whitespace();
    let first = parts
        .next()
        .ok_or_else(|| String::from("Type a feedback pattern like G-Y-- first"))?;

    match parts.next() {
        Some(second) => {
            let guess = alphabet
                .encode(first)
                .map_err(|e| format!("Bad word '{first}': {e}"))?;
            Ok((guess, parse_feedback(second)?))
        }
        None => {
            let guess = *suggestion.ok_or_else(|| {
                String::from("Nothing to score; enter 'WORD PATTERN', 'new', or 'quit'")
            })?;
            Ok((guess, parse_feedback(first)?))
        }
    }
}

fn parse_feedback(text: &str) -> Result<Feedback, String> {
    if text.eq_ignore_ascii_case("win") {
        return Ok(Feedback::ALL_CORRECT);
    }
    Feedback::parse(text).map_err(|e| format!("Bad pattern '{text}': {e}"))
}

fn ask_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
