//! Tests for command-line parsing.

use clap::Parser;
use strictly_minimax::{Cli, Command};
use strictly_tictactoe::{Board, Pruning};

#[test]
fn test_parse_best() {
    let cli = Cli::try_parse_from(["strictly_minimax", "best", "XX./OO./..."]).unwrap();
    let expected: Board = "XX./OO./...".parse().unwrap();
    match cli.command {
        Command::Best { board } => assert_eq!(board, expected),
        other => panic!("Expected best, got {:?}", other),
    }
    assert!(cli.config.is_none());
    assert!(cli.pruning.is_none());
}

#[test]
fn test_parse_analyze_with_options() {
    let cli = Cli::try_parse_from([
        "strictly_minimax",
        "analyze",
        ".........",
        "--json",
        "--pruning",
        "exhaustive",
        "--config",
        "solver.toml",
    ])
    .unwrap();

    assert_eq!(cli.pruning, Some(Pruning::Exhaustive));
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("solver.toml")));
    match cli.command {
        Command::Analyze { board, json } => {
            assert_eq!(board, Board::new());
            assert!(json);
        }
        other => panic!("Expected analyze, got {:?}", other),
    }
}

#[test]
fn test_rejects_malformed_board() {
    let err = Cli::try_parse_from(["strictly_minimax", "best", "XQ......."]).unwrap_err();
    assert!(err.to_string().contains("Unexpected board symbol"));
}

#[test]
fn test_rejects_unbalanced_board() {
    assert!(Cli::try_parse_from(["strictly_minimax", "best", "OO......."]).is_err());
}

#[test]
fn test_rejects_unknown_pruning() {
    assert!(
        Cli::try_parse_from(["strictly_minimax", "--pruning", "beam", "best", "........."])
            .is_err()
    );
}
