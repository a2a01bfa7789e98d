//! Authoritative game state: board, turn and move history.

use super::action::{InvalidMoveError, Move};
use super::invariants::{GameInvariants, InvariantSet};
use super::phases::{Outcome, Turn};
use super::rules;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game.
///
/// Created with an empty board and the human to move. Mutated only by
/// [`apply_move`](Self::apply_move), one mark per call. Once the board is
/// terminal the turn is [`Turn::GameOver`] and every further move is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn: Turn,
    pub(super) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current board, recomputed on every call.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.turn == Turn::GameOver
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places `mark` at board index `index`.
    ///
    /// On success returns the marked position; the turn flips to the other
    /// side, or becomes [`Turn::GameOver`] if the move ended the game.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidMoveError`] and leaves the state untouched if the
    /// game is over, the index is outside 0-8, the square is occupied, or
    /// `mark` is not the side to move.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Position, InvalidMoveError> {
        let position = self.validate(index, mark).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        self.board.set(position, super::Square::Marked(mark));
        self.history.push(Move::new(mark, position));

        let outcome = self.outcome();
        self.turn = if outcome.is_terminal() {
            info!(%outcome, "Game finished");
            Turn::GameOver
        } else {
            Turn::of(mark.other())
        };
        debug!(%position, turn = ?self.turn, "Move applied");

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after {}",
            Move::new(mark, position)
        );

        Ok(position)
    }

    /// Preconditions for a move, checked in order: game over, bounds,
    /// occupancy, turn.
    fn validate(&self, index: usize, mark: Mark) -> Result<Position, InvalidMoveError> {
        let expected = self.turn.mark().ok_or(InvalidMoveError::GameOver)?;
        let position = Position::from_index(index).ok_or(InvalidMoveError::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(InvalidMoveError::Occupied(position));
        }
        if mark != expected {
            return Err(InvalidMoveError::WrongTurn(mark));
        }
        Ok(position)
    }

    /// Discards this game and returns a fresh initial state.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(self) -> Self {
        Self::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
