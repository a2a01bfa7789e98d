//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The mark a side places in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player's mark (`X`, moves first).
    Player,
    /// The automated opponent's mark (`O`).
    Opponent,
}

impl Mark {
    /// Returns the other side's mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a side's mark.
    Marked(Mark),
}

impl Square {
    /// Board symbol for this square, `.` when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Marked(mark) => mark.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: hypothetical placements during search work on
/// private copies and never touch the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, Square::Marked(mark));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |&pos| self.is_empty(pos))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Marked(mark))
            .count()
    }

    /// Compact 9-character form (`X`, `O`, `.`), the inverse of `FromStr`.
    pub fn compact(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx + 1)?,
                    Square::Marked(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell character was not a mark or an empty marker.
    #[display("Unexpected cell {:?} at index {}", _0, _1)]
    BadCell(char, usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X`/`x`, `O`/`o`, and `.`, `-`, `_` or space for
    /// empty. `|`, `/` and newlines are ignored as row separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, &c) in Position::ALL.iter().zip(cells.iter()) {
            let square = match c {
                'X' | 'x' => Square::Marked(Mark::Player),
                'O' | 'o' => Square::Marked(Mark::Opponent),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(BoardParseError::BadCell(other, pos.to_index())),
            };
            board.set(*pos, square);
        }
        Ok(board)
    }
}
