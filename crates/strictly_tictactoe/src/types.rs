//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::invariants::{Invariant, MarkBalanceInvariant};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: there is no way to change a square in place. Every
/// move produces a new board through [`crate::result`], and the board it was
/// derived from stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Square; 9]", into = "[Square; 9]")]
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

    /// Builds a board from three rows of squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unbalanced`] unless X holds as many marks as O,
    /// or exactly one more.
    #[instrument]
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Result<Self, BoardError> {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self::from_squares(squares)
    }

    /// Builds a board from nine squares in row-major order.
    pub(crate) fn from_squares(squares: [Square; 9]) -> Result<Self, BoardError> {
        let board = Self { squares };
        if MarkBalanceInvariant::holds(&board) {
            Ok(board)
        } else {
            Err(BoardError::Unbalanced {
                x: board.count(Player::X),
                o: board.count(Player::O),
            })
        }
    }

    /// Gets the square at the given move, or `None` when it is off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|index| self.squares[index])
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the marks held by a player.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the squares grouped into rows.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let mut rows = [[Square::Empty; 3]; 3];
        for (row, cells) in rows.iter_mut().enumerate() {
            cells.copy_from_slice(&self.squares[row * 3..row * 3 + 3]);
        }
        rows
    }

    /// Returns a copy of this board with `player` marked at `mv`.
    ///
    /// `mv` must be on the board; callers validate it first.
    pub(crate) fn with_mark(&self, mv: Move, player: Player) -> Self {
        let mut next = *self;
        next.squares[mv.row * 3 + mv.column] = Square::Occupied(player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Square; 9]> for Board {
    type Error = BoardError;

    fn try_from(squares: [Square; 9]) -> Result<Self, Self::Error> {
        Self::from_squares(squares)
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.squares
    }
}

/// Error raised when a caller-supplied board cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// X must hold as many marks as O, or one more.
    #[display("Unbalanced board: {} X marks against {} O marks", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// A character that names no square.
    #[display("Unexpected board symbol {:?}", _0)]
    Symbol(char),

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    Length(usize),
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_opponent_flips() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Move::ALL.iter().all(|mv| board.is_empty(*mv)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_rows_keeps_layout() {
        let rows = [[X, E, E], [E, O, E], [E, E, X]];
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(board.rows(), rows);
        assert_eq!(board.get(Move::new(1, 1)), Some(O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_from_rows_rejects_unbalanced() {
        let err = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err, BoardError::Unbalanced { x: 0, o: 1 });

        let err = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]).unwrap_err();
        assert_eq!(err, BoardError::Unbalanced { x: 2, o: 0 });
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert_eq!(board.get(Move::new(0, 3)), None);
        assert!(!board.is_empty(Move::new(7, 7)));
    }

    #[test]
    fn test_deserialize_checks_balance() {
        let center = Board::new().with_mark(Move::new(1, 1), Player::X);
        let json = serde_json::to_string(&center).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board.count(Player::X), 1);

        let unbalanced = json.replace("{\"Occupied\":\"X\"}", "{\"Occupied\":\"O\"}");
        assert!(serde_json::from_str::<Board>(&unbalanced).is_err());
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Move::new(2, 1), Player::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Move::new(2, 1)), Some(X));
    }
}
