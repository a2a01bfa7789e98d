//! tictactoe_minimax - tic-tac-toe against an opponent that never loses
//!
//! The library holds the two pieces of real logic; rendering and input are
//! left to the caller.
//!
//! # Architecture
//!
//! - **Game state**: the 3x3 board, whose turn it is, and outcome detection
//!   ([`GameState`], [`outcome`])
//! - **Search**: exhaustive minimax choosing the opponent's move
//!   ([`SearchEngine`])
//! - **Session**: the human-move-then-reply loop a front end drives
//!   ([`Session`])
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Outcome, Session, Turn};
//!
//! let mut session = Session::new();
//! let report = session.play(0).unwrap();
//! assert_eq!(report.opponent_move.map(|p| p.to_index()), Some(4));
//! assert_eq!(session.state().turn(), Turn::Player);
//! assert_eq!(report.outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod search;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, GameSnapshot, GameState, InvalidMoveError, Mark, Move, Outcome,
    Position, Square, Turn, invariants, outcome, rules,
};

// Crate-level exports - Search
pub use search::{OPPONENT_WIN, PLAYER_WIN, ScoredMove, SearchEngine, TIE};

// Crate-level exports - Session management
pub use session::{Session, TurnReport};
