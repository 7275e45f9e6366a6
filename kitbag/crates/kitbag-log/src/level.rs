//! Severity levels.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from least to most severe.
///
/// A record is written when its level is at least the logger's minimum.
/// `Invalid`, `All` and `None` only make sense as a minimum; records logged
/// at those levels are written as `Error`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Invalid = 0,
    All,
    Debug,
    #[default]
    Info,
    Start,
    Exit,
    Warning,
    Error,
    None,
}

/// Every level, in order.
pub const LEVELS: [Level; 9] = [
    Level::Invalid,
    Level::All,
    Level::Debug,
    Level::Info,
    Level::Start,
    Level::Exit,
    Level::Warning,
    Level::Error,
    Level::None,
];

const NAMES: [&str; 9] = [
    "LevelInvalid",
    "LevelAll",
    "LevelDebug",
    "LevelInfo",
    "LevelStart",
    "LevelExit",
    "LevelWarning",
    "LevelError",
    "LevelNone",
];

const LABELS: [&str; 9] = ["Inval", "  All", "Debug", " Info", "Start", " Exit", " Warn", "Error", " None"];

/// The level names in order, comma separated, for enumerated config fields.
pub const LEVEL_NAMES: &str =
    "LevelInvalid,LevelAll,LevelDebug,LevelInfo,LevelStart,LevelExit,LevelWarning,LevelError,LevelNone";

impl Level {
    /// Returns the level named `name`, or `Invalid` for an unknown name.
    pub fn from_name(name: &str) -> Self {
        NAMES
            .iter()
            .position(|n| *n == name)
            .map_or(Level::Invalid, |index| LEVELS[index])
    }

    /// Returns the level at position `index`, or `Invalid` if out of range.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| LEVELS.get(i).copied())
            .unwrap_or(Level::Invalid)
    }

    /// Returns the canonical name, such as `LevelInfo`.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Returns the five-character label written in each record.
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Maps the levels that cannot label a record to `Error`.
    pub fn coerce(self) -> Self {
        if self < Level::Debug || self > Level::Error {
            Level::Error
        } else {
            self
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = Level::from_name(name);
        if level == Level::Invalid && name != "LevelInvalid" {
            let short = LEVELS
                .iter()
                .find(|level| level.name()["Level".len()..].eq_ignore_ascii_case(name));
            return short.copied().ok_or_else(|| format!("Unknown log level '{}'", name));
        }
        Ok(level)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
