//! Configuration loader tests

use fab_infrastructure::config::{AppConfig, ConfigLoader, LoggingConfig, RegistrationConfig};
use fab_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("fab.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.registration.auto_register);
    assert!(!config.registration.strict);
    assert!(config.registration.skip.is_empty());
}

#[test]
fn test_load_from_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"
json_format = true

[registration]
strict = true
skip = ["Circle"]
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert!(config.registration.strict);
    assert_eq!(config.registration.skip, vec!["Circle".to_string()]);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[registration]\nauto_register = false\n");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert!(!config.registration.auto_register);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_blank_skip_entry_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[registration]\nskip = [\"Square\", \"  \"]\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("skip[1]"));
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[registration\nstrict = ");

    assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let original = AppConfig {
        registration: RegistrationConfig {
            auto_register: true,
            strict: true,
            skip: vec!["Triangle".to_string()],
        },
        ..AppConfig::default()
    };

    let loader = ConfigLoader::new();
    loader.save_to_file(&original, &path).unwrap();
    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(loaded.registration, original.registration);
}

#[test]
fn test_config_path_accessor() {
    assert!(ConfigLoader::new().config_path().is_none());

    let loader = ConfigLoader::new().with_config_path("/tmp/fab.toml");
    assert_eq!(
        loader.config_path(),
        Some(std::path::Path::new("/tmp/fab.toml"))
    );
}
