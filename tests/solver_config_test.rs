//! Tests for loading solver configuration from TOML.

use std::io::Write;
use strictly_minimax::SolverConfig;
use strictly_tictactoe::Pruning;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_default_config() {
    let config = SolverConfig::default();
    assert_eq!(config.pruning(), &Pruning::AlphaBeta);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_load_full_config() {
    let file = config_file("pruning = \"exhaustive\"\nlog_filter = \"debug\"\n");
    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.pruning(), &Pruning::Exhaustive);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = config_file("");
    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn test_unknown_pruning_mode_fails() {
    let file = config_file("pruning = \"beam\"\n");
    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_key_fails() {
    let file = config_file("depth = 3\n");
    assert!(SolverConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = SolverConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_with_pruning_overrides() {
    let config = SolverConfig::default().with_pruning(Pruning::Exhaustive);
    assert_eq!(config.pruning(), &Pruning::Exhaustive);
    assert_eq!(config.log_filter(), "warn");
}
