//! Human-versus-engine game session.
//!
//! Packages the presentation-side control flow: apply the human's mark, then,
//! while the game is still running and it is the opponent's turn, ask the
//! search engine and apply its reply.

use crate::games::tictactoe::{GameSnapshot, GameState, InvalidMoveError, Mark, Outcome, Position, Turn};
use crate::search::SearchEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What happened during one call to [`Session::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the human's mark went.
    pub player_move: Position,
    /// The opponent's reply, absent if the human's move ended the game.
    pub opponent_move: Option<Position>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// A single game between the human and the search engine.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    engine: SearchEngine,
}

impl Session {
    /// Creates a new session with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the search engine.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Serializable view of the current game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Plays the human's mark at `index` and, if the game continues, the
    /// opponent's reply.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidMoveError`] from the game state if the human's
    /// move is refused; nothing is changed in that case.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, InvalidMoveError> {
        let player_move = self.state.apply_move(index, Mark::Player)?;

        let opponent_move = self.reply()?;
        let outcome = self.state.outcome();
        debug!(%player_move, ?opponent_move, %outcome, "Turn complete");

        Ok(TurnReport {
            player_move,
            opponent_move,
            outcome,
        })
    }

    /// Applies the engine's move if it is the opponent's turn.
    fn reply(&mut self) -> Result<Option<Position>, InvalidMoveError> {
        if self.state.turn() != Turn::Opponent {
            return Ok(None);
        }

        match self.engine.choose_move(self.state.board()) {
            Some(position) => {
                self.state.apply_move(position.to_index(), Mark::Opponent)?;
                Ok(Some(position))
            }
            None => Ok(None),
        }
    }

    /// Starts a new game, discarding the current one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let finished = std::mem::take(&mut self.state);
        info!(outcome = %finished.outcome(), "Restarting game");
        self.state = finished.reset();
    }
}
