use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::validation::Violation;

/// Error types for configuration loading and schema handling.
///
/// Malformed configuration content is never an error: it is reported as a
/// list of [`Violation`]s. This enum only covers conditions that abort an
/// operation, such as an unregistered schema name or an unreadable file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A schema name was requested that the registry does not know
    #[error("unknown schema '{name}'")]
    UnknownSchema {
        /// The requested schema name
        name: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A document could not be parsed in its declared format
    #[error("failed to parse {format} at '{location}': {details}")]
    ParseError {
        /// Location of the document (file path or "string")
        location: String,
        /// Name of the format being parsed
        format: &'static str,
        /// Parse error details
        details: String,
    },

    /// A schema cannot produce a complete default document
    #[error("schema '{schema}' has no complete defaults: {}", summarize(.violations))]
    IncompleteDefaults {
        /// Schema that failed to materialize
        schema: String,
        /// Violations raised while materializing
        violations: Vec<Violation>,
    },

    /// A value could not be serialized for output
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        ConfigError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a parse error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `format` - Name of the format being parsed (e.g. "JSON")
    /// * `path` - Optional path to the file that failed to parse
    pub fn parse(error: impl fmt::Display, format: &'static str, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfigError::ParseError {
            location,
            format,
            details: error.to_string(),
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
