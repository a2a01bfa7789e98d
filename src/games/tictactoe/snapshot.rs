//! Serializable read-only view of a game for presentation layers.

use super::{GameState, Move, Outcome, Turn};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs: board symbols, turn indicator, outcome and
/// the moves played so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board symbols in row-major order (`X`, `O`, `.`).
    pub board: [char; 9],
    /// Whose turn it is.
    pub turn: Turn,
    /// Outcome derived from the board.
    pub outcome: Outcome,
    /// Moves played, oldest first.
    pub history: Vec<Move>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        Self {
            board: game.board().squares().map(|s| s.symbol()),
            turn: game.turn(),
            outcome: game.outcome(),
            history: game.history().to_vec(),
        }
    }
}

impl GameSnapshot {
    /// Renders the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
