//! Strictly Minimax - optimal-move solver CLI
//!
//! Solves one tic-tac-toe board per invocation and prints the answer.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_minimax::{Analysis, Cli, Command, SolverConfig};
use strictly_tictactoe::Board;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => SolverConfig::default(),
    };
    let config = match cli.pruning {
        Some(pruning) => config.with_pruning(pruning),
        None => config,
    };

    init_tracing(&config);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Best { board } => run_best(&board, &config),
        Command::Analyze { board, json } => run_analyze(&board, &config, json),
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over the config.
fn init_tracing(config: &SolverConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the optimal move
#[instrument(skip(config))]
fn run_best(board: &Board, config: &SolverConfig) -> Result<()> {
    let analysis = Analysis::of(board, config);
    println!("{}", analysis.best_move_line());
    Ok(())
}

/// Print the full analysis
#[instrument(skip(config))]
fn run_analyze(board: &Board, config: &SolverConfig, json: bool) -> Result<()> {
    let analysis = Analysis::of(board, config);
    if json {
        let out = serde_json::to_string_pretty(&analysis).context("Serializing analysis")?;
        println!("{}", out);
    } else {
        println!("{}", analysis.render_text(board));
    }
    Ok(())
}
