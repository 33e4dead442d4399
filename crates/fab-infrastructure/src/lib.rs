//! # Infrastructure Layer
//!
//! Ambient services for applications built on `fab-registry`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`bootstrap`] | Startup catalog and registration pass |
//! | [`constants`] | File names, prefixes and defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{Bootstrapped, bootstrap, bootstrap_with};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistrationConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
