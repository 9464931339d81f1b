use std::path::Path;

use thiserror::Error;

/// Error types for the mpremote application.
///
/// Covers configuration loading and parsing. Service-specific failures
/// live in their own error types (`PlayerError`, `BrokerError`).
#[derive(Error, Debug)]
pub enum MpRemoteError {
    /// Configuration field missing or invalid
    #[error("invalid config field '{field}' in {section}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Section containing the field
        section: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for mpremote operations.
pub type Result<T> = std::result::Result<T, MpRemoteError>;

impl MpRemoteError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        MpRemoteError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error tied to the path that failed.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        MpRemoteError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
