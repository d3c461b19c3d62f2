//! Strictly Minimax library - command-line front end for the tic-tac-toe solver
//!
//! The game logic and search live in [`strictly_tictactoe`]; this crate adds
//! what a one-shot command-line query needs around it.
//!
//! # Architecture
//!
//! - **Cli**: argument parsing (clap)
//! - **Config**: optional TOML settings (pruning mode, log filter)
//! - **Analysis**: runs the search once and renders the answer as text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod cli;
mod config;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig};

// Crate-level exports - Analysis
pub use analysis::Analysis;
