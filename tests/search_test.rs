//! Tests for the minimax search engine.

use tictactoe_minimax::{
    Board, Mark, OPPONENT_WIN, Outcome, PLAYER_WIN, Position, SearchEngine, TIE, outcome,
};

fn board(s: &str) -> Board {
    s.parse().expect("Valid board")
}

/// Plays every human continuation from `board` (human to move) against the
/// engine's replies, failing if any line ends in a player win.
fn assert_never_loses(engine: &SearchEngine, board: Board) {
    match outcome(&board) {
        Outcome::PlayerWin => panic!("Player won:\n{}", board),
        Outcome::OpponentWin | Outcome::Tie => return,
        Outcome::InProgress => {}
    }

    for human in board.empty_positions() {
        let after_human = board.with_mark(human, Mark::Player);
        match outcome(&after_human) {
            Outcome::PlayerWin => panic!("Player won:\n{}", after_human),
            Outcome::OpponentWin | Outcome::Tie => continue,
            Outcome::InProgress => {}
        }

        let reply = engine
            .choose_move(&after_human)
            .expect("In-progress board has a move");
        assert!(after_human.is_empty(reply), "Engine chose an occupied cell");
        assert_never_loses(engine, after_human.with_mark(reply, Mark::Opponent));
    }
}

#[test]
fn test_engine_never_loses_when_player_starts() {
    assert_never_loses(&SearchEngine::new(), Board::new());
}

#[test]
fn test_engine_never_loses_when_it_starts() {
    let engine = SearchEngine::new();
    let first = engine.choose_move(&Board::new()).expect("Empty board has a move");
    assert_never_loses(&engine, Board::new().with_mark(first, Mark::Opponent));
}

#[test]
fn test_chosen_move_is_never_worse_than_an_alternative() {
    let engine = SearchEngine::new();
    for b in ["X........", "....X....", ".X.......", "XX.OO....", "X...O...X", "XO..X...."] {
        let b = board(b);
        let ranked = engine.ranked_moves(&b);
        let best = ranked.iter().map(|m| m.score).max().expect("Has moves");
        let chosen = engine.choose_move(&b).expect("Has a move");
        let chosen_score = ranked
            .iter()
            .find(|m| m.position == chosen)
            .map(|m| m.score)
            .expect("Chosen move is ranked");
        assert_eq!(chosen_score, best, "board {}", b.compact());
    }
}

#[test]
fn test_choice_is_deterministic() {
    let engine = SearchEngine::new();
    for b in ["X........", "X...O...X", "XO..X....", ".X.O.X..."] {
        let b = board(b);
        assert_eq!(engine.choose_move(&b), engine.choose_move(&b));
        assert_eq!(engine.choose_move(&b), SearchEngine::new().choose_move(&b));
    }
}

#[test]
fn test_empty_board_opponent_to_move() {
    let engine = SearchEngine::new();
    let empty = Board::new();
    let chosen = engine.choose_move(&empty).expect("Empty board has a move");

    // Every opening scores 0 under optimal play, so the first index wins.
    assert_eq!(chosen, Position::TopLeft);
    assert!(engine.score(&empty.with_mark(chosen, Mark::Opponent), false) >= TIE);
}

#[test]
fn test_blocks_or_wins_on_double_threat_board() {
    // X X _ / O O _ / _ _ _, O to move.
    let engine = SearchEngine::new();
    let b = board("XX.OO....");
    let chosen = engine.choose_move(&b).expect("Has a move");
    assert!(
        matches!(chosen, Position::TopRight | Position::MiddleRight),
        "chose {:?}",
        chosen
    );
    assert_eq!(engine.score(&b.with_mark(chosen, Mark::Opponent), false), OPPONENT_WIN);
}

#[test]
fn test_corner_opening_is_a_tie() {
    let engine = SearchEngine::new();
    let b = board("X........");
    let ranked = engine.ranked_moves(&b);

    let best = ranked.iter().map(|m| m.score).max();
    assert_eq!(best, Some(TIE));

    // Only the center holds a corner opening.
    assert_eq!(engine.choose_move(&b), Some(Position::Center));
    for m in ranked.iter().filter(|m| m.position != Position::Center) {
        assert_eq!(m.score, PLAYER_WIN, "{:?}", m.position);
    }
}

#[test]
fn test_blocks_single_threat() {
    // X X _ / _ O _ / _ _ _, O to move: only 2 avoids a loss.
    let engine = SearchEngine::new();
    let b = board("XX..O....");
    assert_eq!(engine.choose_move(&b), Some(Position::TopRight));
}

#[test]
fn test_score_of_terminal_boards() {
    let engine = SearchEngine::new();
    for maximizing in [true, false] {
        assert_eq!(engine.score(&board("XXXOO...."), maximizing), PLAYER_WIN);
        assert_eq!(engine.score(&board("OOOXX.X.."), maximizing), OPPONENT_WIN);
        assert_eq!(engine.score(&board("XOXXOOOXX"), maximizing), TIE);
    }
}

#[test]
fn test_full_board_has_no_move() {
    let engine = SearchEngine::new();
    assert!(engine.ranked_moves(&board("XOXXOOOXX")).is_empty());
}
