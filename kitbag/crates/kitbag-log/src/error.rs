//! Error types for the logger.
//!
//! These never reach callers of the logging functions: the logger reports
//! them as records after falling back to standard error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Can't create directory for log file '{}': {source}.", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Can't open log file '{}' for writing: {source}.", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Can't rename log file '{}' to '{}': {source}.", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Can't list log files in '{}': {source}.", dir.display())]
    List { dir: PathBuf, source: io::Error },
}

pub type LogResult<T> = std::result::Result<T, LogError>;
