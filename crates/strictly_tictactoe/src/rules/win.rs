//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Player, Square};
use tracing::instrument;

/// Winning lines in scan order: rows, columns, main diagonal, anti-diagonal.
const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found in scan order,
/// `None` if no line is complete.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(Square::Occupied(player)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(player))
            && board.get(c) == Some(Square::Occupied(player))
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.OX")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("OX./XO./X.O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O../...")), None);
    }

    #[test]
    fn test_scan_reports_first_line() {
        // Unreachable in play, but both players hold a row here.
        let both = Board::new()
            .with_mark(Move::new(0, 0), Player::O)
            .with_mark(Move::new(0, 1), Player::O)
            .with_mark(Move::new(0, 2), Player::O)
            .with_mark(Move::new(1, 0), Player::X)
            .with_mark(Move::new(1, 1), Player::X)
            .with_mark(Move::new(1, 2), Player::X);
        assert_eq!(winner(&both), Some(Player::O));
    }
}
