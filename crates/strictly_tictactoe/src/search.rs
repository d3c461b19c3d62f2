//! Adversarial search: minimax with alpha-beta pruning.
//!
//! X maximizes utility and O minimizes it. Two mutually recursive evaluators,
//! `max_value` and `min_value`, each return the best value reachable for
//! their side together with the move that reaches it.
//! The game tree is at most nine plies deep, so the search always runs to
//! completion.

use crate::rules::{actions, player, successor, terminal, utility};
use crate::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lower bound below every reachable utility.
const NEG_INFINITY: i32 = i32::MIN;
/// Upper bound above every reachable utility.
const POS_INFINITY: i32 = i32::MAX;

/// Whether the search cuts off branches that cannot change the decision.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Pruning {
    /// Stop exploring a move list once `beta <= alpha`.
    #[default]
    AlphaBeta,
    /// Plain minimax: every branch is explored.
    Exhaustive,
}

/// What a search found, and how much work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchReport {
    /// Optimal move for the side to act; `None` on a terminal board.
    best_move: Option<Move>,
    /// Game value under optimal play: 1 X wins, -1 O wins, 0 draw.
    value: i32,
    /// Boards evaluated, the root included.
    nodes: u64,
    /// Times the `beta <= alpha` test stopped a move loop.
    cutoffs: u64,
}

/// Value of a subtree and the move leading into its best line.
#[derive(Debug, Clone, Copy)]
struct Scored {
    value: i32,
    best_move: Option<Move>,
}

/// Work counters threaded through one search.
#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Minimax search driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    pruning: Pruning,
}

impl Searcher {
    /// Creates a searcher with the given pruning mode.
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Returns the pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Searches the game tree below `board` for the side to act.
    ///
    /// X to move starts from the maximizer, O from the minimizer, both with
    /// the widest possible window.
    #[instrument(skip(self, board), fields(pruning = %self.pruning, to_move = %player(board)))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut stats = SearchStats::default();
        let scored = match player(board) {
            Player::X => self.max_value(board, NEG_INFINITY, POS_INFINITY, &mut stats),
            Player::O => self.min_value(board, NEG_INFINITY, POS_INFINITY, &mut stats),
        };

        debug!(
            value = scored.value,
            best_move = ?scored.best_move,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Search complete"
        );

        SearchReport {
            best_move: scored.best_move,
            value: scored.value,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        }
    }

    /// Best value X can force from `board`.
    #[instrument(level = "trace", skip(self, board, stats))]
    fn max_value(
        &self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> Scored {
        stats.nodes += 1;
        if terminal(board) {
            return Scored {
                value: utility(board),
                best_move: None,
            };
        }

        let mut best = Scored {
            value: NEG_INFINITY,
            best_move: None,
        };
        for mv in actions(board) {
            let value = self.min_value(&successor(board, mv), alpha, beta, stats).value;
            if value > best.value {
                best = Scored {
                    value,
                    best_move: Some(mv),
                };
            }
            alpha = alpha.max(best.value);
            if self.cuts_off(alpha, beta) {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Best value O can force from `board`.
    #[instrument(level = "trace", skip(self, board, stats))]
    fn min_value(
        &self,
        board: &Board,
        alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Scored {
        stats.nodes += 1;
        if terminal(board) {
            return Scored {
                value: utility(board),
                best_move: None,
            };
        }

        let mut best = Scored {
            value: POS_INFINITY,
            best_move: None,
        };
        for mv in actions(board) {
            let value = self.max_value(&successor(board, mv), alpha, beta, stats).value;
            if value < best.value {
                best = Scored {
                    value,
                    best_move: Some(mv),
                };
            }
            beta = beta.min(best.value);
            if self.cuts_off(alpha, beta) {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    fn cuts_off(&self, alpha: i32, beta: i32) -> bool {
        self.pruning == Pruning::AlphaBeta && beta <= alpha
    }
}

/// Returns the optimal move for the side to act, or `None` if the game is over.
///
/// When several moves are equally good, which one is returned is unspecified.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        return None;
    }
    Searcher::new(Pruning::AlphaBeta).search(board).best_move
}

/// Returns the game value of `board` under optimal play by both sides.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> i32 {
    Searcher::default().search(board).value
}
