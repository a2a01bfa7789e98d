//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! [`GameState::apply_move`](super::GameState::apply_move) checks them in
//! debug builds; they can also be tested independently.

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
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameState, Mark, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        game.apply_move(0, Mark::Player).unwrap();
        game.apply_move(4, Mark::Opponent).unwrap();
        game.apply_move(2, Mark::Player).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.apply_move(4, Mark::Player).unwrap();

        // Stray mark the history knows nothing about, and a turn that
        // contradicts the history.
        game.board.set(Position::TopLeft, Square::Marked(Mark::Opponent));
        game.turn = crate::games::tictactoe::Turn::Player;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
