//! Structured logging with tracing
//!
//! Installs the global subscriber. `FAB_LOG` takes precedence over the
//! configured level when set.

use crate::constants::LOG_FILTER_ENV;
use fab_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Returns `Ok(false)` when a global subscriber was already installed,
/// in which case the existing one is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Layer types differ between formats, so each branch installs its own stack
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_thread_names(true)
            .with_writer(std::io::stderr);
        Registry::default().with(filter).with(stderr).try_init()
    } else {
        let stderr = fmt::layer()
            .with_target(config.with_target)
            .with_writer(std::io::stderr);
        Registry::default().with(filter).with(stderr).try_init()
    };

    match installed {
        Ok(()) => {
            info!("Logging initialized with level: {}", level);
            Ok(true)
        }
        Err(err) => {
            debug!(error = %err, "Global subscriber already installed");
            Ok(false)
        }
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
