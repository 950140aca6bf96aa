//! Error types for the hexscan library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hexscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for loading, extraction, and configuration.
///
/// Classification itself never fails: malformed colors take the sentinel
/// path in [`crate::color::ColorConverter`].
#[derive(Error, Debug)]
pub enum ScanError {
    /// Input path does not exist
    #[error("File not found at '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Input path exists but is a directory or special file
    #[error("Path '{}' is a directory, not a file", path.display())]
    NotAFile { path: PathBuf },

    /// Input file cannot be opened for reading
    #[error("Permission denied to read file '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// Input file is not valid UTF-8 text
    #[error("Could not decode file '{}'. Is it a binary file?", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Any other I/O failure
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hex color could not be parsed into RGB channels
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    /// Extraction pattern failed to compile
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration file could not be parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ScanError {
    /// Create an invalid hex error
    pub fn invalid_hex(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Map an I/O error raised while reading `path` to the matching variant
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Check if this error concerns a single color rather than the whole run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScanError::InvalidHex { .. })
    }

    /// Get user-friendly error description for CLI display
    pub fn user_message(&self) -> String {
        match self {
            ScanError::FileNotFound { .. } | ScanError::NotAFile { .. } => {
                "Please pass the path of a readable text file (CSS, HTML, ...).".to_string()
            }
            ScanError::PermissionDenied { .. } => {
                "Check the file permissions and try again.".to_string()
            }
            ScanError::Decode { .. } => {
                "Only UTF-8 text files can be scanned for colors.".to_string()
            }
            ScanError::Config { .. } => {
                "The configuration file must be valid JSON. Run with --help for the format."
                    .to_string()
            }
            _ => "Color scan failed.".to_string(),
        }
    }
}
