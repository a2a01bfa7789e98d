//! Tic-tac-toe: board, rules, game state and invariants.

mod action;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use action::{InvalidMoveError, Move};
pub use phases::{Outcome, Turn};
pub use position::Position;
pub use rules::outcome;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Board, BoardParseError, Mark, Square};
