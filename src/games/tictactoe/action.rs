//! Move and move-error types.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.position.label())
    }
}

/// A move request the game state refused. The state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index is outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The mark does not belong to the side to move.
    #[display("It's not {}'s turn", _0.symbol())]
    WrongTurn(Mark),
}

impl std::error::Error for InvalidMoveError {}
