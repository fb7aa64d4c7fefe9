//! Tests for config loading and path resolution.

use filepruner::{Config, Error};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn loads_all_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filepruner.toml");
    fs::write(
        &path,
        r#"
directories = ["/tmp/t", "~/logs"]
file_types = [".log", ".tmp"]
delete_after = "7d"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.directories, vec!["/tmp/t", "~/logs"]);
    assert_eq!(config.file_types, vec![".log", ".tmp"]);
    assert_eq!(config.delete_after, "7d");
}

#[test]
fn missing_fields_default_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filepruner.toml");
    fs::write(&path, "delete_after = \"7d\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.directories.is_empty());
    assert!(config.file_types.is_empty());
    assert_eq!(config.delete_after, "7d");
}

#[test]
fn empty_file_is_a_valid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filepruner.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.directories.is_empty());
    assert!(config.delete_after.is_empty());
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(Config::load_from(&path), Err(Error::Io(_))));
}

#[test]
fn malformed_toml_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filepruner.toml");
    fs::write(&path, "directories = not-a-list\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn explicit_flag_wins_path_resolution() {
    let flagged = Path::new("/somewhere/else.toml");
    let resolved = Config::resolve_path(Some(flagged)).unwrap();
    assert_eq!(resolved, flagged);
}

#[test]
fn tilde_is_expanded_in_directories() {
    let config = Config {
        directories: vec!["~/logs".to_string(), "/var/log".to_string()],
        file_types: Vec::new(),
        delete_after: String::new(),
    };

    let expanded = config.expanded_directories();
    assert_eq!(expanded.len(), 2);
    assert!(!expanded[0].to_string_lossy().starts_with('~'));
    assert_eq!(expanded[1], Path::new("/var/log"));
}
