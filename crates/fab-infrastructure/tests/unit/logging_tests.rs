//! Logging tests

use fab_infrastructure::config::LoggingConfig;
use fab_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    assert!(parse_log_level("verbose").is_err());
    assert!(parse_log_level("").is_err());
}

#[test]
fn test_init_logging_twice_is_not_fatal() {
    let config = LoggingConfig::default();

    init_logging(&config).unwrap();

    assert!(!init_logging(&config).unwrap());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "shout".to_string(),
        ..LoggingConfig::default()
    };

    assert!(init_logging(&config).is_err());
}
