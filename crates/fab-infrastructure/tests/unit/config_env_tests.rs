//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p fab-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use fab_infrastructure::config::ConfigLoader;
use std::env;
use std::fs;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fab.toml");
    fs::write(&path, "[registration]\nstrict = false\n").unwrap();
    set_env("FAB__REGISTRATION__STRICT", "true");

    let config = ConfigLoader::new().with_config_path(&path).load();
    remove_env("FAB__REGISTRATION__STRICT");

    assert!(config.unwrap().registration.strict);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_ignored() {
    set_env("FAB_LOGGING_LEVEL", "trace");

    let config = ConfigLoader::new().load();
    remove_env("FAB_LOGGING_LEVEL");

    assert_ne!(config.unwrap().logging.level, "trace");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix() {
    set_env("SHAPES__LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new().with_env_prefix("SHAPES").load();
    remove_env("SHAPES__LOGGING__LEVEL");

    assert_eq!(config.unwrap().logging.level, "warn");
}
