//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an occupied
/// square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Marked(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
