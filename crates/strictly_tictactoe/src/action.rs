//! Moves and the error raised when one cannot be played.
//!
//! A move names a square by row and column. Coordinates are not checked
//! on construction: an off-board move is a value like any other, and it is
//! [`crate::result`] that refuses to play it.

use serde::{Deserialize, Serialize};

/// A square to mark, by row and column (both 0-2 on the board).
///
/// Moves order row-major, so a set of moves iterates top-left first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub column: usize,
}

impl Move {
    /// All 9 on-board moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns true when both coordinates are on the board.
    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.column < 3
    }

    /// Converts the move to a row-major board index (0-8).
    pub fn index(self) -> Option<usize> {
        self.is_on_board().then(|| self.row * 3 + self.column)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the square, for on-board moves.
    pub fn label(self) -> Option<&'static str> {
        let label = match self.index()? {
            0 => "Top-left",
            1 => "Top-center",
            2 => "Top-right",
            3 => "Middle-left",
            4 => "Center",
            5 => "Middle-right",
            6 => "Bottom-left",
            7 => "Bottom-center",
            _ => "Bottom-right",
        };
        Some(label)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error raised when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// Row or column lies outside 0-2.
    #[display("Move ({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The square at the move is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),
}

impl std::error::Error for InvalidMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), Some(index));
            assert_eq!(Move::from_index(index), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_off_board_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(usize::MAX, usize::MAX).label(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Move::new(0, 0).label(), Some("Top-left"));
        assert_eq!(Move::new(1, 1).label(), Some("Center"));
        assert_eq!(Move::new(2, 2).label(), Some("Bottom-right"));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut sorted = Move::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Move::ALL);
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidMoveError::OutOfBounds { row: 3, column: 1 };
        assert_eq!(err.to_string(), "Move (3, 1) is off the board");

        let err = InvalidMoveError::SquareOccupied(Move::new(1, 1));
        assert!(err.to_string().contains("occupied"));
    }
}
