//! Configuration files on disk.

use std::io::Write;

use tempfile::NamedTempFile;
use tic_tac_three::core::ConfigError;
use tic_tac_three::loader::{ConfigurationLoader, LoadError};

fn config_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_valid_file() {
    let file = config_file("[playground]\nsize = 7\n\n[players]\nmarks = [\"Q\", \"W\", \"E\"]\n");
    let config = ConfigurationLoader::load(file.path()).unwrap();
    assert_eq!(config.playground_size(), 7);
    assert_eq!(config.player_marks(), ['Q', 'W', 'E']);

    let resolved = ConfigurationLoader::load_game_configuration(Some(file.path()));
    assert_eq!(resolved, Some(config));
}

#[test]
fn test_no_path_uses_default() {
    let config = ConfigurationLoader::load_game_configuration(None).unwrap();
    assert_eq!(config, ConfigurationLoader::load_default().unwrap());
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(ConfigurationLoader::load(&path).unwrap_err().is_unreadable());

    let config = ConfigurationLoader::load_game_configuration(Some(&path)).unwrap();
    assert_eq!(config.playground_size(), 3);
    assert_eq!(config.player_marks(), ['X', 'O', 'A']);
}

#[test]
fn test_size_bounds() {
    for size in [2, 11, 0] {
        let file = config_file(&format!(
            "[playground]\nsize = {}\n[players]\nmarks = [\"X\", \"O\", \"A\"]\n",
            size
        ));
        assert!(matches!(
            ConfigurationLoader::load(file.path()),
            Err(LoadError::Invalid(ConfigError::PlaygroundSize { .. }))
        ));
        assert_eq!(ConfigurationLoader::load_game_configuration(Some(file.path())), None);
    }

    for size in [3, 10] {
        let file = config_file(&format!(
            "[playground]\nsize = {}\n[players]\nmarks = [\"X\", \"O\", \"A\"]\n",
            size
        ));
        assert!(ConfigurationLoader::load(file.path()).is_ok());
    }
}

#[test]
fn test_duplicated_marks_rejected() {
    let file = config_file("[playground]\nsize = 4\n[players]\nmarks = [\"X\", \"O\", \"X\"]\n");
    assert!(matches!(
        ConfigurationLoader::load(file.path()),
        Err(LoadError::Invalid(ConfigError::DuplicatedMarks))
    ));
    assert_eq!(ConfigurationLoader::load_game_configuration(Some(file.path())), None);
}

#[test]
fn test_wrong_mark_count_rejected() {
    let file = config_file("[playground]\nsize = 4\n[players]\nmarks = [\"X\", \"O\"]\n");
    assert!(matches!(
        ConfigurationLoader::load(file.path()),
        Err(LoadError::Invalid(ConfigError::MarkCount { count: 2 }))
    ));
}

#[test]
fn test_empty_mark_rejected() {
    let file = config_file("[playground]\nsize = 4\n[players]\nmarks = [\"X\", \"  \", \"A\"]\n");
    assert!(matches!(
        ConfigurationLoader::load(file.path()),
        Err(LoadError::Invalid(ConfigError::InvalidMark { index: 1, .. }))
    ));
}

#[test]
fn test_malformed_file_rejected() {
    let file = config_file("[playground\nsize = ");
    let err = ConfigurationLoader::load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert!(!err.is_unreadable());
    assert!(err.to_string().starts_with("malformed configuration"));
    assert_eq!(ConfigurationLoader::load_game_configuration(Some(file.path())), None);
}

#[test]
fn test_unknown_key_rejected() {
    let file = config_file(
        "[playground]\nsize = 4\ncolour = \"red\"\n[players]\nmarks = [\"X\", \"O\", \"A\"]\n",
    );
    assert!(matches!(ConfigurationLoader::load(file.path()), Err(LoadError::Parse(_))));
}
