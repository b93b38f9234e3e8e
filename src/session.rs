//! Trial-by-trial session state
//!
//! A `PuzzleSession` threads the score → constraint → prune loop across up
//! to `max_tries` guesses. Each recorded trial shrinks the candidate set
//! and appends to an immutable history, and the session settles into
//! `Won` or `Lost`. How feedback is obtained, whether computed from a
//! known secret or typed in by a player, is the caller's concern.

use crate::core::{Code, Feedback, PuzzleError};
use crate::solver::{self, Constraint};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Guesses remain and the puzzle is unsolved
    InProgress,
    /// A recorded guess came back all-Correct
    Won,
    /// Every trial was used without winning
    Lost,
}

/// One recorded guess and the feedback it earned
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub guess: Code,
    pub feedback: Feedback,
}

/// State for one puzzle: trial history and the surviving candidates
///
/// Owned by exactly one caller. The candidate set only ever shrinks, and
/// the trial history is append-only.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    trials: Vec<Trial>,
    candidates: Vec<Code>,
    max_tries: usize,
    status: SessionStatus,
}

impl PuzzleSession {
    /// Start a session over a candidate list
    #[must_use]
    pub fn new(candidates: Vec<Code>, max_tries: usize) -> Self {
        Self {
            trials: Vec::with_capacity(max_tries),
            candidates,
            max_tries,
            status: SessionStatus::InProgress,
        }
    }

    /// Record a scored guess: append the trial, prune the candidates, and
    /// settle the status
    ///
    /// All-or-nothing: when an error is returned, no trial is appended and
    /// the candidates are untouched. Pruning down to an empty candidate
    /// set is not an error: it signals inconsistent feedback upstream,
    /// and the session carries on reporting it.
    ///
    /// # Errors
    /// `SessionTerminated` once the session has won or lost.
    pub fn record(&mut self, guess: Code, feedback: Feedback) -> Result<SessionStatus, PuzzleError> {
        if self.status != SessionStatus::InProgress {
            return Err(PuzzleError::SessionTerminated);
        }

        let constraint = Constraint::from_trial(&guess, &feedback);
        self.candidates = solver::prune(&self.candidates, &constraint);
        self.trials.push(Trial { guess, feedback });

        if feedback.is_win() {
            self.status = SessionStatus::Won;
        } else if self.trials.len() >= self.max_tries {
            self.status = SessionStatus::Lost;
        }
        Ok(self.status)
    }

    /// Suggest the next guess and its expected lit count
    ///
    /// Both the guess pool and the scoring pool are the surviving
    /// candidates; the search never leaves the remaining dictionary.
    ///
    /// # Errors
    /// `EmptyPool` when no candidates remain.
    pub fn recommend(&self) -> Result<(Code, f64), PuzzleError> {
        solver::best_guess(&self.candidates, &self.candidates)
    }

    /// Drop one word from the candidate set
    ///
    /// For dictionary entries known to be stale. Absent words are ignored.
    pub fn blacklist(&mut self, word: &Code) {
        self.candidates.retain(|candidate| candidate != word);
    }

    /// Trials recorded so far, in order
    #[must_use]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Candidates still consistent with every recorded trial
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::score;

    fn code(word: &str) -> Code {
        Alphabet::default().encode(word).unwrap()
    }

    fn codes(words: &[&str]) -> Vec<Code> {
        words.iter().map(|w| code(w)).collect()
    }

    #[test]
    fn new_session_is_in_progress() {
        let session = PuzzleSession::new(codes(&["ARENA", "ARISE"]), 6);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.trial_count(), 0);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn recording_prunes_and_appends() {
        let mut session = PuzzleSession::new(codes(&["ARENA", "ARISE", "AGREE"]), 6);
        let guess = code("ABBEY");
        let fb = score(&guess, &code("ARENA"));

        let status = session.record(guess, fb).unwrap();

        assert_eq!(status, SessionStatus::InProgress);
        assert_eq!(session.trial_count(), 1);
        assert_eq!(session.trials()[0].guess, guess);
        assert_eq!(session.trials()[0].feedback, fb);
        // AGREE's position-3 E is ruled out
        assert_eq!(session.candidates(), codes(&["ARENA", "ARISE"]));
    }

    #[test]
    fn secret_survives_every_trial() {
        let secret = code("ARENA");
        let mut session =
            PuzzleSession::new(codes(&["ARENA", "ARISE", "AGREE", "ERASE", "STEAM"]), 6);

        for guess_word in ["STEAM", "ERASE", "ARISE"] {
            let guess = code(guess_word);
            session.record(guess, score(&guess, &secret)).unwrap();
            assert!(session.candidates().contains(&secret));
        }
    }

    #[test]
    fn all_correct_feedback_wins() {
        let mut session = PuzzleSession::new(codes(&["ARENA", "ARISE"]), 6);
        let guess = code("ARENA");

        let status = session.record(guess, score(&guess, &guess)).unwrap();
        assert_eq!(status, SessionStatus::Won);
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn exhausting_tries_loses() {
        let mut session = PuzzleSession::new(codes(&["ARENA", "ARISE", "AGREE"]), 2);
        let secret = code("ARENA");

        let guess = code("STEAM");
        assert_eq!(
            session.record(guess, score(&guess, &secret)).unwrap(),
            SessionStatus::InProgress
        );

        let guess = code("ERASE");
        assert_eq!(
            session.record(guess, score(&guess, &secret)).unwrap(),
            SessionStatus::Lost
        );
    }

    #[test]
    fn winning_on_the_last_try_still_wins() {
        let mut session = PuzzleSession::new(codes(&["ARENA"]), 1);
        let guess = code("ARENA");

        let status = session.record(guess, score(&guess, &guess)).unwrap();
        assert_eq!(status, SessionStatus::Won);
    }

    #[test]
    fn terminal_sessions_reject_further_trials() {
        let mut session = PuzzleSession::new(codes(&["ARENA"]), 6);
        let guess = code("ARENA");
        session.record(guess, score(&guess, &guess)).unwrap();

        let before = session.trial_count();
        let result = session.record(guess, score(&guess, &guess));
        assert_eq!(result, Err(PuzzleError::SessionTerminated));
        assert_eq!(session.trial_count(), before);
    }

    #[test]
    fn empty_candidates_is_legal_but_unrecommendable() {
        let mut session = PuzzleSession::new(codes(&["SLATE", "GRATE"]), 6);

        // Feedback fixing C,R,A,N in place is consistent with neither
        // candidate; the set empties but the session stays alive
        let guess = code("CRANE");
        let status = session.record(guess, Feedback::parse("GGGG-").unwrap()).unwrap();

        assert_eq!(status, SessionStatus::InProgress);
        assert!(session.candidates().is_empty());
        assert_eq!(session.recommend(), Err(PuzzleError::EmptyPool));

        // Further trials are still accepted
        let guess = code("ZESTY");
        let status = session.record(guess, Feedback::parse("-----").unwrap()).unwrap();
        assert_eq!(status, SessionStatus::InProgress);
    }

    #[test]
    fn recommend_draws_from_surviving_candidates() {
        let words = codes(&["ARENA", "ARISE", "AGREE", "ERASE"]);
        let mut session = PuzzleSession::new(words.clone(), 6);

        let (first, _) = session.recommend().unwrap();
        assert!(words.contains(&first));

        let secret = code("ARENA");
        let guess = code("ABBEY");
        session.record(guess, score(&guess, &secret)).unwrap();

        let (next, _) = session.recommend().unwrap();
        assert!(session.candidates().contains(&next));
    }

    #[test]
    fn blacklist_removes_only_the_named_word() {
        let mut session = PuzzleSession::new(codes(&["ARENA", "ARISE"]), 6);

        session.blacklist(&code("ARISE"));
        assert_eq!(session.candidates(), codes(&["ARENA"]));

        // Absent words are a no-op
        session.blacklist(&code("ZESTY"));
        assert_eq!(session.candidates(), codes(&["ARENA"]));
    }
}
