//! Configuration module for the kbt CLI.
//!
//! The configuration file uses the kitbag scanner grammar:
//!
//! ```text
//! log_level   LevelInfo
//! log_file    "~/log/kbt.log"
//! tee_stderr  no
//! rotation {
//!     interval_seconds  86400
//!     retention_count   1
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use dirs::{config_dir, home_dir};
use kitbag_log::{Level, LogSettings, LEVEL_NAMES};
use kitbag_scan::{scan_record, Scanner};
use serde::{Serialize, Serializer};

use crate::error::{KbtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kbt.conf";

/// Application configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Index into [`LEVEL_NAMES`].
    #[serde(serialize_with = "serialize_level")]
    pub log_level: i32,

    /// Log file; empty for standard error.
    pub log_file: String,

    /// Copy records to standard error as well as the log file.
    pub tee_stderr: bool,

    /// Log rotation settings.
    pub rotation: RotationConfig,
}

/// Log rotation settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RotationConfig {
    /// Seconds between rotations; zero disables rotation.
    pub interval_seconds: i64,

    /// Archived logs kept after each rotation.
    pub retention_count: i64,
}

scan_record!(Config {
    log_level => enumerated(LEVEL_NAMES),
    log_file,
    tee_stderr,
    rotation => nested,
});

scan_record!(RotationConfig {
    interval_seconds,
    retention_count,
});

fn serialize_level<S: Serializer>(index: &i32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(Level::from_index(i64::from(*index)).name())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::Info as i32,
            log_file: String::new(),
            tee_stderr: false,
            rotation: RotationConfig::default(),
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        let defaults = LogSettings::default();
        Self {
            interval_seconds: i64::try_from(defaults.rotation_interval.as_secs()).unwrap_or(i64::MAX),
            retention_count: i64::try_from(defaults.retention_count).unwrap_or(i64::MAX),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/kbt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KbtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let mut scanner = Scanner::open(path)?;
        let mut config = Self::default();
        let outcome = scanner.scan_record(&mut config)?;
        log::debug!(
            "Bound {} configuration fields from '{}'.",
            outcome.fields_bound,
            path.display()
        );
        Ok(config)
    }

    /// Parse configuration from text.
    #[cfg(test)]
    pub fn parse(text: &str) -> Result<Self> {
        let mut config = Self::default();
        Scanner::with_filename(text, CONFIG_FILE_NAME).scan_record(&mut config)?;
        Ok(config)
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = home_dir() {
            let path = home.join(".config").join("kbt").join(CONFIG_FILE_NAME);
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(dir) = config_dir() {
            let path = dir.join("kbt").join(CONFIG_FILE_NAME);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// The configured minimum level.
    pub fn level(&self) -> Level {
        Level::from_index(i64::from(self.log_level))
    }

    /// Converts the configuration into logger settings.
    pub fn to_log_settings(&self) -> Result<LogSettings> {
        let interval = u64::try_from(self.rotation.interval_seconds).map_err(|_| {
            KbtError::Validation(format!(
                "rotation interval_seconds must not be negative, got {}",
                self.rotation.interval_seconds
            ))
        })?;
        let retention_count = usize::try_from(self.rotation.retention_count).map_err(|_| {
            KbtError::Validation(format!(
                "rotation retention_count must not be negative, got {}",
                self.rotation.retention_count
            ))
        })?;

        Ok(LogSettings {
            level: self.level(),
            tee_stderr: self.tee_stderr,
            filename: self.log_file.clone(),
            rotation_interval: Duration::from_secs(interval),
            retention_count,
        })
    }

    /// Renders the configuration in the file grammar.
    pub fn to_conf_string(&self) -> String {
        format!(
            "log_level   {}\nlog_file    {}\ntee_stderr  {}\nrotation {{\n    interval_seconds  {}\n    retention_count   {}\n}}\n",
            self.level().name(),
            quote(&self.log_file),
            if self.tee_stderr { "yes" } else { "no" },
            self.rotation.interval_seconds,
            self.rotation.retention_count,
        )
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.level(), Level::Info);
        assert!(config.log_file.is_empty());
        assert!(!config.tee_stderr);
        assert_eq!(config.rotation.interval_seconds, 86_400);
        assert_eq!(config.rotation.retention_count, 1);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "log_level LevelDebug\n\
             log_file \"~/log/kbt.log\"\n\
             tee_stderr yes\n\
             rotation {\n  interval_seconds 60\n  retention_count 5\n}\n",
        )
        .unwrap();
        assert_eq!(config.level(), Level::Debug);
        assert_eq!(config.log_file, "~/log/kbt.log");
        assert!(config.tee_stderr);
        assert_eq!(config.rotation.interval_seconds, 60);
        assert_eq!(config.rotation.retention_count, 5);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = Config::parse("# only the level\nlog-level LevelWarning\n").unwrap();
        assert_eq!(config.level(), Level::Warning);
        assert_eq!(config.rotation, RotationConfig::default());
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = Config::parse("log_colour red\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "kbt.conf:1 Scanned 'log_colour'. Configuration identifier expected"
        );
    }

    #[test]
    fn test_parse_bad_level() {
        let err = Config::parse("log_level Loud\n").unwrap_err();
        assert!(err.to_string().contains("Invalid enum 'Loud'"), "{}", err);
    }

    #[test]
    fn test_conf_string_parses_back() {
        let config = Config {
            log_level: Level::Error as i32,
            log_file: "/var/log/with \"quotes\".log".to_string(),
            tee_stderr: true,
            rotation: RotationConfig {
                interval_seconds: 3600,
                retention_count: 7,
            },
        };
        assert_eq!(Config::parse(&config.to_conf_string()).unwrap(), config);
        assert_eq!(Config::parse(&Config::default().to_conf_string()).unwrap(), Config::default());
    }

    #[test]
    fn test_to_log_settings() {
        let mut config = Config::default();
        config.rotation.interval_seconds = 120;
        let settings = config.to_log_settings().unwrap();
        assert_eq!(settings.level, Level::Info);
        assert_eq!(settings.rotation_interval, Duration::from_secs(120));
        assert_eq!(settings.retention_count, 1);

        config.rotation.retention_count = -1;
        assert!(matches!(config.to_log_settings(), Err(KbtError::Validation(_))));
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tee_stderr yes\nrotation { retention_count 3 }\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.tee_stderr);
        assert_eq!(config.rotation.retention_count, 3);
        assert_eq!(config.rotation.interval_seconds, 86_400);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from_path(&dir.path().join("absent.conf"));
        assert!(matches!(result, Err(KbtError::Config(_))));
    }

    #[test]
    fn test_json_uses_level_name() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"log_level\":\"LevelInfo\""), "{}", json);
        assert!(json.contains("\"interval_seconds\":86400"));
    }
}
