//! Error handling module for the kbt CLI.

use kitbag_scan::ScanError;
use thiserror::Error;

/// Main error type for the kbt CLI application.
#[derive(Error, Debug)]
pub enum KbtError {
    /// Error when the configuration cannot be found or used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the scanner while reading configuration or input text.
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KbtError.
pub type Result<T> = std::result::Result<T, KbtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = KbtError::Config("missing file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn test_validation_error_display() {
        let err = KbtError::Validation("negative interval".to_string());
        assert_eq!(err.to_string(), "Validation error: negative interval");
    }

    #[test]
    fn test_scan_error_is_shown_as_is() {
        let err: KbtError = ScanError::Syntax {
            file: "kbt.conf".to_string(),
            line: 3,
            token: "bogus".to_string(),
            message: "Configuration identifier expected".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "kbt.conf:3 Scanned 'bogus'. Configuration identifier expected"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KbtError = io_err.into();
        assert!(matches!(err, KbtError::Io(_)));
    }
}
