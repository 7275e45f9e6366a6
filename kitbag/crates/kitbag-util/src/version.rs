//! Compile version and time stamps.
//!
//! Both values are read from the build environment: set
//! `KITBAG_COMPILE_VERSION` and `KITBAG_COMPILE_TIME` when compiling to stamp
//! a binary. The time uses the layout `2020-02-03-16-02-44-0800`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

const DEFAULT_VERSION: &str = "0.0.0";
const DEFAULT_TIME: &str = "compile time not set";

/// Returns the version stamped at compile time, or `0.0.0`.
pub fn compile_version() -> &'static str {
    option_env!("KITBAG_COMPILE_VERSION").unwrap_or(DEFAULT_VERSION)
}

/// Returns the raw compile time stamp, or `compile time not set`.
pub fn compile_time_string() -> &'static str {
    option_env!("KITBAG_COMPILE_TIME").unwrap_or(DEFAULT_TIME)
}

/// Returns the parsed compile time, if one was stamped.
pub fn compile_time() -> Option<DateTime<FixedOffset>> {
    parse_compile_time(compile_time_string())
}

/// Parses a stamp like `2020-02-03-16-02-44-0800` or `2020-02-03-16-02-44Z`.
pub fn parse_compile_time(stamp: &str) -> Option<DateTime<FixedOffset>> {
    let stamp = stamp.trim();
    if let Some(naive) = stamp.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(naive, "%Y-%m-%d-%H-%M-%S").ok()?;
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }
    DateTime::parse_from_str(stamp, "%Y-%m-%d-%H-%M-%S%z").ok()
}
