//! One-shot board analysis and its text rendering.

use crate::SolverConfig;
use derive_getters::Getters;
use serde::Serialize;
use strictly_tictactoe::{Board, Move, Outcome, Player, Searcher, outcome, player};
use tracing::{info, instrument};

/// Everything the solver reports about a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Side to act.
    to_move: Player,
    /// Won, drawn or in progress.
    outcome: Outcome,
    /// Game value under optimal play: 1 X wins, -1 O wins, 0 draw.
    value: i32,
    /// Optimal move; `None` once the game is over.
    best_move: Option<Move>,
    /// Boards evaluated by the search.
    nodes: u64,
    /// Move loops stopped early by pruning.
    cutoffs: u64,
}

impl Analysis {
    /// Searches `board` with the configured pruning mode.
    #[instrument(skip(board, config), fields(pruning = %config.pruning()))]
    pub fn of(board: &Board, config: &SolverConfig) -> Self {
        let outcome = outcome(board);
        let report = Searcher::new(*config.pruning()).search(board);

        info!(value = report.value(), nodes = report.nodes(), "Board analyzed");
        Self {
            to_move: player(board),
            outcome,
            value: *report.value(),
            best_move: *report.best_move(),
            nodes: *report.nodes(),
            cutoffs: *report.cutoffs(),
        }
    }

    /// One line naming the best move, or saying the game is over.
    pub fn best_move_line(&self) -> String {
        match self.best_move {
            Some(mv) => format!("{} {}", mv, mv.label().unwrap_or_default()),
            None => format!("No move: game over ({})", self.outcome),
        }
    }

    /// Multi-line human-readable report.
    pub fn render_text(&self, board: &Board) -> String {
        let value = match self.value {
            1 => "X wins",
            -1 => "O wins",
            _ => "draw",
        };
        let mut out = format!("{}\n\n", board);
        out.push_str(&format!("To move:   {}\n", self.to_move));
        out.push_str(&format!("Outcome:   {}\n", self.outcome));
        out.push_str(&format!("Value:     {} ({})\n", self.value, value));
        out.push_str(&format!("Best move: {}\n", self.best_move_line()));
        out.push_str(&format!("Nodes:     {}\n", self.nodes));
        out.push_str(&format!("Cutoffs:   {}", self.cutoffs));
        out
    }
}
