//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a line holds three of the same mark. Lines are
/// scanned in `LINES` order; on boards reachable by alternating play at most
/// one mark can complete a line.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Like [`check_winner`], also returning the completed line.
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Marked(mark)
            if board.get(b) == Square::Marked(mark) && board.get(c) == Square::Marked(mark) =>
        {
            Some((mark, [a, b, c]))
        }
        _ => None,
    })
}
