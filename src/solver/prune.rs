//! Candidate pruning

use super::Constraint;
use crate::core::Code;

/// Filter the candidates down to those a constraint permits
///
/// Pure: builds a new list and never mutates the input, so the caller can
/// keep the pre-prune set. An empty result is a legal outcome (the
/// feedback so far is contradictory, or the dictionary never held the
/// secret) and callers must handle it rather than treat it as an error.
#[must_use]
pub fn prune(candidates: &[Code], constraint: &Constraint) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| constraint.permits(candidate))
        .copied()
        .collect()
}
