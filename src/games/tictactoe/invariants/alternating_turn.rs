//! Alternating turn invariant: the sides alternate X, O, X, O, ...

use super::super::{GameState, Mark, Turn};
use super::Invariant;

/// Invariant: sides alternate turns, human first.
///
/// The current turn must agree with the history: `GameOver` exactly when
/// the board is terminal, otherwise the side whose count is behind.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != Mark::Player) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = if game.outcome().is_terminal() {
            Turn::GameOver
        } else if history.len() % 2 == 0 {
            Turn::Player
        } else {
            Turn::Opponent
        };

        game.turn() == expected
    }

    fn description() -> &'static str {
        "Sides alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = GameState::new();
        game.apply_move(4, Mark::Player).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Turn::Opponent);
    }

    #[test]
    fn test_finished_game_holds() {
        let mut game = GameState::new();
        for (index, mark) in [
            (0, Mark::Player),
            (4, Mark::Opponent),
            (1, Mark::Player),
            (6, Mark::Opponent),
            (2, Mark::Player),
        ] {
            game.apply_move(index, mark).unwrap();
        }
        assert_eq!(game.turn(), Turn::GameOver);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_side_twice_violates() {
        let mut game = GameState::new();
        game.apply_move(0, Mark::Player).unwrap();

        game.history.push(Move::new(Mark::Player, Position::Center));
        game.turn = Turn::Player;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
