//! Core error types for kitbag-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for the synchronization helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UtilError {
    /// A wait ended before the lock was signaled
    #[error("timed out")]
    TimedOut,
}

/// Result type alias for util operations
pub type UtilResult<T> = std::result::Result<T, UtilError>;
