//! Tests for configuration loading.

use rewind_games::GameConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.log_filter(), "info");
    assert!(*config.show_coordinates());
    assert_eq!(*config.max_sessions(), 16);
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("log_filter = \"debug,rewind_tictactoe=trace\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.log_filter(), "debug,rewind_tictactoe=trace");
    assert!(*config.show_coordinates());
    assert_eq!(*config.max_sessions(), 16);
}

#[test]
fn test_full_file() {
    let file = write_config("log_filter = \"warn\"\nshow_coordinates = false\nmax_sessions = 2\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert!(!*config.show_coordinates());
    assert_eq!(*config.max_sessions(), 2);
}

#[test]
fn test_rejects_zero_sessions() {
    let file = write_config("max_sessions = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("max_sessions"));
}

#[test]
fn test_rejects_malformed_file() {
    let file = write_config("show_coordinates = \"maybe\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file() {
    let err = GameConfig::from_file("/nonexistent/rewind_games.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
