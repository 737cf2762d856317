//! Error types for parsing and store construction

use std::path::Path;

use thiserror::Error;

use crate::ingestion::Dependency;

/// Result type alias for struct-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parsing and store construction errors
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding library for a format is not compiled in
    #[error("{library} is required to read this format: {install_hint}")]
    MissingDependency {
        library: &'static str,
        install_hint: String,
    },

    /// File could not be opened or decoded
    #[error("Failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    /// No parser registered for the format identifier
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Operation the store does not implement
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Conflicting or missing construction inputs
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless discriminant of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingDependency,
    Parse,
    UnsupportedFormat,
    UnsupportedOperation,
    InvalidConfiguration,
    Config,
    Io,
}

impl Error {
    /// Create a parse error for a file
    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Create a missing dependency error naming the library and how to enable it
    pub fn missing_dependency(dependency: &Dependency) -> Self {
        Self::MissingDependency {
            library: dependency.name,
            install_hint: dependency.install_hint(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Create an unsupported operation error
    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Get the taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDependency { .. } => ErrorKind::MissingDependency,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
