//! Config command: print the effective configuration.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Print JSON instead of the configuration grammar.
    pub json: bool,
}

pub fn run_config(args: ConfigArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    } else {
        write!(out, "{}", config.to_conf_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_grammar() {
        let mut out = Vec::new();
        run_config(ConfigArgs::default(), &Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("log_level   LevelInfo\n"));
        assert!(text.contains("tee_stderr  no\n"));
    }

    #[test]
    fn test_run_config_json() {
        let mut out = Vec::new();
        run_config(ConfigArgs { json: true }, &Config::default(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["log_level"], "LevelInfo");
        assert_eq!(value["rotation"]["retention_count"], 1);
    }
}
