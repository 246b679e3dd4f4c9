//! First-class invariants over game history.
//!
//! Invariants are logical properties that must hold after every history
//! mutation. They are checked in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose from individual invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_bounds;
pub mod empty_root;
pub mod ply_sequence;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_bounds::CursorInBoundsInvariant;
pub use empty_root::EmptyRootInvariant;
pub use ply_sequence::PlySequenceInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyRootInvariant,
    CursorInBoundsInvariant,
    PlySequenceInvariant,
);

/// Invariants that only hold for histories recorded through the engine.
pub type GameInvariants = (PlySequenceInvariant, AlternatingMarksInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, HistoryStore, Player};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        let history = HistoryStore::new(&GameConfig::classic());
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branch_discard() {
        let mut history = HistoryStore::new(&GameConfig::classic());
        for (ply, index) in [0, 4, 8].into_iter().enumerate() {
            history.append(Player::to_move_at(ply), index).unwrap();
        }
        history.jump(1).unwrap();
        history.append(Player::O, 2).unwrap();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_game_invariants_report_violation() {
        let mut history = HistoryStore::new(&GameConfig::new(2, 7, 2).unwrap());
        history.append(Player::O, 3).unwrap();
        assert!(HistoryInvariants::check_all(&history).is_ok());

        let violations = GameInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AlternatingMarksInvariant::description());
    }
}
