//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_tictactoe::{Board, Pruning};

/// Strictly Minimax - optimal moves for tic-tac-toe
///
/// Boards are nine squares in row-major order: X, O, and `.` for empty,
/// optionally grouped by `/`, e.g. `XX./OO./...`.
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal-move solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Pruning mode (alpha-beta or exhaustive), overrides the config file
    #[arg(long, global = true)]
    pub pruning: Option<Pruning>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to act
    Best {
        /// Board to solve
        board: Board,
    },

    /// Print the side to move, outcome, game value and search statistics
    Analyze {
        /// Board to analyze
        board: Board,

        /// Emit a single JSON object instead of text
        #[arg(long)]
        json: bool,
    },
}
