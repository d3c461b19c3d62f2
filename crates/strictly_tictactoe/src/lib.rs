//! Pure tic-tac-toe game logic and optimal-move search.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 grid of squares ([`Board`], [`Square`], [`Player`])
//! - **Rules**: pure functions over a board ([`player`], [`actions`], [`result`],
//!   [`winner`], [`terminal`], [`utility`], [`outcome`])
//! - **Search**: minimax with alpha-beta pruning ([`minimax`], [`Searcher`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Move, initial_state, minimax, result};
//!
//! let board = initial_state();
//! let board = result(&board, Move::new(1, 1))?;
//! let reply = minimax(&board).expect("game is not over");
//! assert!(board.is_empty(reply));
//! # Ok::<(), strictly_tictactoe::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod notation;
mod phases;
mod rules;
mod search;
mod types;

pub use action::{InvalidMoveError, Move};
pub use invariants::{Invariant, MarkBalanceInvariant};
pub use phases::Outcome;
pub use rules::{
    actions, initial_state, is_draw, outcome, player, result, terminal, utility, winner,
};
pub use search::{Pruning, SearchReport, Searcher, evaluate, minimax};
pub use types::{Board, BoardError, Player, Square};
