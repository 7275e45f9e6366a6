//! Command modules for the kbt CLI.
//!
//! Each subcommand lives in its own file with an `XArgs` struct and a
//! `run_x` function.

pub mod config;
pub mod log;
pub mod timestamp;
pub mod tokens;
pub mod version;

pub use self::config::{run_config, ConfigArgs};
pub use self::log::{run_log, LogArgs};
pub use self::timestamp::{run_timestamp, TimestampArgs};
pub use self::tokens::{run_tokens, TokensArgs};
pub use self::version::run_version;
