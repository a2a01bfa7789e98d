//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating boards according to
//! tic-tac-toe rules. They work on any board, live or hypothetical, which is
//! what lets the search engine score positions it only imagines.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};

/// Derives the outcome of a board.
///
/// A completed line wins for its mark regardless of the other cells; a tie
/// is reported only when no line matches and no empty cell remains.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::win_for(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// Checks if the board is a draw (full with no winner).
pub fn is_draw(board: &Board) -> bool {
    outcome(board) == Outcome::Tie
}
