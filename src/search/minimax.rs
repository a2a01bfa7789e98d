//! Exhaustive minimax search for the opponent's move.
//!
//! Scores are from the opponent's point of view: +1 opponent win, -1 player
//! win, 0 tie. There is no pruning, memoization, depth limit or depth
//! weighting; the full tree from any reachable position is small, and every
//! move with the same minimax value is treated as equal. Among equal moves
//! the lowest index wins.

use crate::games::tictactoe::{Board, Mark, Outcome, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a board the opponent has won.
pub const OPPONENT_WIN: i32 = 1;
/// Score of a tied board.
pub const TIE: i32 = 0;
/// Score of a board the player has won.
pub const PLAYER_WIN: i32 = -1;

/// A candidate opponent move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the opponent would mark.
    pub position: Position,
    /// Minimax value after that mark, human to move next.
    pub score: i32,
}

/// Stateless minimax search engine playing the opponent's mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
    /// Creates a search engine.
    pub fn new() -> Self {
        Self
    }

    /// Chooses the opponent's move on `board`.
    ///
    /// Every empty cell is tried in index order; the first cell reaching the
    /// strictly greatest score is returned. Returns `None` only when the
    /// board has no empty cell.
    ///
    /// The board must not be terminal and the opponent must be to move.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn choose_move(&self, board: &Board) -> Option<Position> {
        debug_assert!(
            !rules::outcome(board).is_terminal(),
            "choose_move called on a terminal board"
        );

        let mut best: Option<ScoredMove> = None;
        for candidate in self.candidates(board) {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        if let Some(chosen) = best {
            debug!(position = %chosen.position, score = chosen.score, "Opponent move chosen");
        }
        best.map(|b| b.position)
    }

    /// Scores every opponent move on `board`, in index order.
    ///
    /// The first entry with the maximum score is the move
    /// [`choose_move`](Self::choose_move) returns.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn ranked_moves(&self, board: &Board) -> Vec<ScoredMove> {
        self.candidates(board).collect()
    }

    fn candidates<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = ScoredMove> + 'a {
        board.empty_positions().map(move |position| ScoredMove {
            position,
            score: self.score(&board.with_mark(position, Mark::Opponent), false),
        })
    }

    /// Minimax value of `board`.
    ///
    /// `maximizing` is true when the opponent moves next. Terminal boards
    /// score [`OPPONENT_WIN`], [`PLAYER_WIN`] or [`TIE`]; otherwise every
    /// empty cell is tried on a copy and the children are combined with max
    /// (opponent) or min (player).
    pub fn score(&self, board: &Board, maximizing: bool) -> i32 {
        match rules::outcome(board) {
            Outcome::OpponentWin => return OPPONENT_WIN,
            Outcome::PlayerWin => return PLAYER_WIN,
            Outcome::Tie => return TIE,
            Outcome::InProgress => {}
        }

        let mark = if maximizing { Mark::Opponent } else { Mark::Player };
        let children = board
            .empty_positions()
            .map(|pos| self.score(&board.with_mark(pos, mark), !maximizing));

        // An in-progress board always has an empty cell, so the fold
        // always sees at least one child.
        if maximizing {
            children.fold(i32::MIN, i32::max)
        } else {
            children.fold(i32::MAX, i32::min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let engine = SearchEngine::new();
        assert_eq!(engine.score(&board("OOOXX.X.."), true), OPPONENT_WIN);
        assert_eq!(engine.score(&board("XXXOO.O.."), false), PLAYER_WIN);
        assert_eq!(engine.score(&board("XOXXOOOXX"), true), TIE);
    }

    #[test]
    fn test_first_index_wins_among_equal_scores() {
        // O can win at once on the middle row (5), but blocking the top row
        // at 1 also forces a win a move later. Both score +1; 1 comes first.
        let engine = SearchEngine::new();
        let b = board("X.XOO.X..");
        let immediate = b.with_mark(Position::MiddleRight, Mark::Opponent);
        assert_eq!(engine.score(&immediate, false), OPPONENT_WIN);
        assert_eq!(
            engine.score(&b.with_mark(Position::TopCenter, Mark::Opponent), false),
            OPPONENT_WIN
        );
        assert_eq!(engine.choose_move(&b), Some(Position::TopCenter));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let engine = SearchEngine::new();
        assert!(engine.ranked_moves(&board("XOXXOOOXX")).is_empty());
    }

    #[test]
    fn test_ranked_moves_agree_with_choice() {
        let engine = SearchEngine::new();
        let b = board("X...O...X");
        let ranked = engine.ranked_moves(&b);
        assert_eq!(ranked.len(), 6);

        let max = ranked.iter().map(|m| m.score).max().unwrap();
        let first_best = ranked.iter().find(|m| m.score == max).unwrap();
        assert_eq!(engine.choose_move(&b), Some(first_best.position));
    }

    #[test]
    fn test_score_does_not_mutate_board() {
        let engine = SearchEngine::new();
        let b = board("X........");
        let before = b;
        let _ = engine.choose_move(&b);
        assert_eq!(b, before);
    }
}
