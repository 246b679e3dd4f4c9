//! Integration tests for loading configuration from disk.

use gridmark::{BoardArgs, GridmarkConfig, replay};
use gridmark_engine::{GameConfig, SortOrder};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_config_file() {
    let file = config_file("[game]\nrows = 5\ncols = 5\nwin_length = 4\n");
    let config = GridmarkConfig::from_file(file.path()).unwrap();
    assert_eq!(config.game(), &GameConfig::new(5, 5, 4).unwrap());
    assert_eq!(config.display().sort(), &SortOrder::Ascending);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GridmarkConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let file = config_file("[game]\nrows = 5\ncols = 5\nwin_length = 4\n[display]\nsort = \"ascending\"\n");
    let args = BoardArgs {
        config: Some(file.path().to_path_buf()),
        win_length: Some(3),
        descending: true,
        ..BoardArgs::default()
    };
    let config = args.resolve().unwrap();
    assert_eq!(config.game(), &GameConfig::new(5, 5, 3).unwrap());
    assert_eq!(config.display().sort(), &SortOrder::Descending);
}

#[test]
fn test_replay_on_configured_board() {
    let file = config_file("[game]\nrows = 4\ncols = 4\nwin_length = 4\n");
    let config = GridmarkConfig::from_file(file.path()).unwrap();

    // X fills the first column, O the second.
    let report = replay(&config, &[0, 1, 4, 5, 8, 9, 12]);
    let text = report.to_text(&config);
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Ply 7 of 7 (4x4, 4 in a row)"));
}
