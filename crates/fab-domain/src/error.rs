//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fab
///
/// Registry operations report ordinary misuse (duplicate or missing
/// identifiers) as plain `bool`/`Option` values. This type is what the
/// `try_*` variants, strict bootstrap and configuration loading return.
#[derive(Error, Debug)]
pub enum Error {
    /// Registration attempted with an identifier that is already present
    #[error("Duplicate identifier {id} in {factory}")]
    DuplicateIdentifier {
        /// Factory (registry) the registration targeted
        factory: String,
        /// Debug rendering of the rejected identifier
        id: String,
    },

    /// Construction or removal requested for an identifier that is not present
    #[error("Unknown identifier {id} in {factory}")]
    UnknownIdentifier {
        /// Factory (registry) that was queried
        factory: String,
        /// Debug rendering of the missing identifier
        id: String,
    },

    /// The creator for an identifier ran but produced no instance
    #[error("Creator for {id} in {factory} declined to construct an instance")]
    ConstructionDeclined {
        /// Factory (registry) that was queried
        factory: String,
        /// Debug rendering of the identifier
        id: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registry error creation methods
impl Error {
    /// Create a duplicate identifier error
    pub fn duplicate_identifier<F, I>(factory: F, id: &I) -> Self
    where
        F: Into<String>,
        I: std::fmt::Debug + ?Sized,
    {
        Self::DuplicateIdentifier {
            factory: factory.into(),
            id: format!("{id:?}"),
        }
    }

    /// Create an unknown identifier error
    pub fn unknown_identifier<F, I>(factory: F, id: &I) -> Self
    where
        F: Into<String>,
        I: std::fmt::Debug + ?Sized,
    {
        Self::UnknownIdentifier {
            factory: factory.into(),
            id: format!("{id:?}"),
        }
    }

    /// Create a construction declined error
    pub fn construction_declined<F, I>(factory: F, id: &I) -> Self
    where
        F: Into<String>,
        I: std::fmt::Debug + ?Sized,
    {
        Self::ConstructionDeclined {
            factory: factory.into(),
            id: format!("{id:?}"),
        }
    }

    /// Whether this error reports a missing identifier
    pub fn is_unknown_identifier(&self) -> bool {
        matches!(self, Self::UnknownIdentifier { .. })
    }

    /// Whether this error reports an identifier collision
    pub fn is_duplicate_identifier(&self) -> bool {
        matches!(self, Self::DuplicateIdentifier { .. })
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.to_string(), source)
    }
}
