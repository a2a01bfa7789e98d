//! Turn and outcome types.
//!
//! `Turn` is the single source of truth for whose move it is. `Outcome` is
//! never stored: it is derived from the board on demand by
//! [`rules::outcome`](super::rules::outcome).

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Whose turn it is, or that the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The human player is to move.
    Player,
    /// The automated opponent is to move.
    Opponent,
    /// The board is terminal; no further marks are accepted.
    GameOver,
}

impl Turn {
    /// The mark expected from the side to move, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Turn::Player => Some(Mark::Player),
            Turn::Opponent => Some(Mark::Opponent),
            Turn::GameOver => None,
        }
    }

    /// The turn on which `mark` is the side to move.
    pub fn of(mark: Mark) -> Self {
        match mark {
            Mark::Player => Turn::Player,
            Mark::Opponent => Turn::Opponent,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player => write!(f, "Your move (X)"),
            Turn::Opponent => write!(f, "Opponent thinking (O)"),
            Turn::GameOver => write!(f, "Game over"),
        }
    }
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell remains.
    InProgress,
    /// The human player completed a line.
    PlayerWin,
    /// The opponent completed a line.
    OpponentWin,
    /// Board full with no completed line.
    Tie,
}

impl Outcome {
    /// Win outcome for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Opponent => Outcome::OpponentWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::OpponentWin => Some(Mark::Opponent),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// True for any outcome other than `InProgress`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::PlayerWin => write!(f, "Winner: X"),
            Outcome::OpponentWin => write!(f, "Winner: O"),
            Outcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
