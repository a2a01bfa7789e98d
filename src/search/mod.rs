//! Opponent move selection.

mod minimax;

pub use minimax::{OPPONENT_WIN, PLAYER_WIN, ScoredMove, SearchEngine, TIE};
