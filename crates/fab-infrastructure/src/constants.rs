//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fab.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fab";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `FAB__REGISTRATION__STRICT=true`.
pub const CONFIG_ENV_PREFIX: &str = "FAB";

/// Separator between prefix and nested key segments in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "FAB_LOG";
