//! Timestamp command: parse a loosely formatted time and print RFC 3339.

use std::io::Write;

use kitbag_scan::time_from_string;

use crate::error::Result;

/// Arguments for the timestamp command.
#[derive(Debug, Clone)]
pub struct TimestampArgs {
    /// Words of the timestamp, joined with single spaces.
    pub text: Vec<String>,
}

pub fn run_timestamp(args: TimestampArgs, out: &mut dyn Write) -> Result<()> {
    let text = args.text.join(" ");
    let time = time_from_string(&text)?;
    log::debug!("Parsed '{}' as {}.", text, time);
    writeln!(out, "{}", time.to_rfc3339())?;
    Ok(())
}
