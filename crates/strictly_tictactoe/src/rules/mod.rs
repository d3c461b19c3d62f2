//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: whose turn it is, which moves are legal,
//! what board a move leads to, and whether and how the game has ended.
//! None of them change the board they are given.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winner;

use crate::invariants::{Invariant, MarkBalanceInvariant};
use crate::{Board, InvalidMoveError, Move, Outcome, Player, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who has the next turn on a board.
///
/// X moves whenever both players hold the same number of marks.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty square as a legal move.
///
/// The set is empty only when the board is full.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}

/// Returns the board that results from the side to move marking `mv`.
///
/// The given board is left untouched.
///
/// # Errors
///
/// - [`InvalidMoveError::OutOfBounds`] if the row or column is outside 0-2.
/// - [`InvalidMoveError::SquareOccupied`] if the square already holds a mark,
///   which is the case for every square of a full board.
#[instrument(skip(board), fields(row = mv.row, column = mv.column))]
pub fn result(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    match board.get(mv) {
        None => Err(InvalidMoveError::OutOfBounds {
            row: mv.row,
            column: mv.column,
        }),
        Some(Square::Occupied(_)) => Err(InvalidMoveError::SquareOccupied(mv)),
        Some(Square::Empty) => {
            let next = successor(board, mv);
            debug_assert!(
                MarkBalanceInvariant::holds(&next),
                "{}",
                MarkBalanceInvariant::description()
            );
            Ok(next)
        }
    }
}

/// Projects the board after the side to move marks `mv`.
///
/// `mv` must be drawn from [`actions`].
pub(crate) fn successor(board: &Board, mv: Move) -> Board {
    board.with_mark(mv, player(board))
}

/// Returns true if the game is over: somebody won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns 1 if X has won, -1 if O has won, 0 otherwise.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board as won, drawn or still in progress.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Won(player)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
