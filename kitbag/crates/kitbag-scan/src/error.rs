//! Error types for the scanner and the record binder.

use thiserror::Error;

/// Error type for scanning and binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The input is exhausted.
    #[error("end of input")]
    EndOfInput,

    /// A lexical or parse error, framed with its location and token.
    #[error("{file}:{line} Scanned '{token}'. {message}")]
    Syntax {
        /// Base name of the scanned file.
        file: String,
        /// Line on which the error was detected.
        line: u32,
        /// The last token scanned.
        token: String,
        /// What went wrong.
        message: String,
    },

    /// The input could not be read.
    #[error("Can't read '{path}': {reason}")]
    Read { path: String, reason: String },

    /// A record field has a kind the binder cannot fill.
    #[error("'{identifier}' unhandled type: {kind}")]
    UnhandledType { identifier: String, kind: String },
}

impl ScanError {
    /// Returns true for [`ScanError::EndOfInput`].
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Returns the bare message of a syntax error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Syntax { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for scanner operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;
