//! Log command: append one record through the configured logger.

use kitbag_log::Level;

use crate::error::{KbtError, Result};

/// Arguments for the log command.
#[derive(Debug, Clone)]
pub struct LogArgs {
    /// Level name, full (`LevelWarning`) or short (`warning`).
    pub level: String,
    /// Message words, joined with single spaces.
    pub message: Vec<String>,
}

pub fn parse_level(name: &str) -> Result<Level> {
    let level: Level = name.parse().map_err(KbtError::Validation)?;
    if level == Level::Invalid || level == Level::None || level == Level::All {
        return Err(KbtError::Validation(format!(
            "Level '{}' can't be used for a record",
            level
        )));
    }
    Ok(level)
}

pub fn run_log(args: LogArgs) -> Result<()> {
    let level = parse_level(&args.level)?;
    let message = args.message.join(" ");
    if message.trim().is_empty() {
        return Err(KbtError::Validation("empty log message".to_string()));
    }

    let logger = kitbag_log::global();
    logger.log_at(level, file!(), line!(), format_args!("{}", message));
    logger.flush();
    Ok(())
}
