//! Kitbag Log - a rotating line logger.
//!
//! Records carry a timestamp, the caller's source location and a level:
//!
//! ```text
//! 2020-02-03T16:02:44-08:00               src/main.rs:42    Info: Listening on port 8080.
//! ```
//!
//! The process-wide logger is reached through [`global`] and the
//! [`info!`](crate::info) family of macros. [`install_log_facade`] also
//! routes the `log` crate's macros here, so library crates that log through
//! `log` end up in the same file.
//!
//! ```no_run
//! use kitbag_log::{Level, LogSettings};
//!
//! kitbag_log::configure(&LogSettings {
//!     level: Level::Debug,
//!     filename: "~/log/server.log".to_string(),
//!     ..LogSettings::default()
//! });
//! kitbag_log::info!("Listening on port {}.", 8080);
//! ```

pub mod error;
pub mod facade;
pub mod level;
pub mod logger;
pub mod record;
pub mod rotation;
pub mod stack;

use lazy_static::lazy_static;

pub use error::{LogError, LogResult};
pub use facade::install_log_facade;
pub use level::{Level, LEVEL_NAMES};
pub use logger::{LogSettings, Logger, DEFAULT_RETENTION_COUNT, DEFAULT_ROTATION_INTERVAL};
pub use stack::pretty_stack_string;

lazy_static! {
    static ref GLOBAL_LOGGER: Logger = Logger::new();
}

/// The process-wide logger.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Applies `settings` to the process-wide logger.
pub fn configure(settings: &LogSettings) {
    global().configure(settings);
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_with_level {
    ($level:expr, $($arg:tt)+) => {
        $crate::global().log_at($level, file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! start {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Start, $($arg)+) };
}

#[macro_export]
macro_rules! exit {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Exit, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log_with_level!($crate::Level::Error, $($arg)+) };
}
