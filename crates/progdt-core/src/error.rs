//! Error types for the progdt library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for everything around the formatter.
///
/// Formatting itself never fails; these cover settings, time zone lookup,
/// argument parsing and text insertion.
#[derive(Error, Debug)]
pub enum ProgdtError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Settings file could not be parsed or written
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Time zone could not be resolved
    #[error("Unknown time zone '{name}': {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// No command is registered under the given name
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },
    /// Settings store could not be accessed
    #[error("Settings error: {message}")]
    Settings { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ProgdtError {
        ProgdtError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ProgdtError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProgdtError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for progdt operations
pub type Result<T> = std::result::Result<T, ProgdtError>;
