//! Kbt CLI - a command-line front end for the kitbag crates.
//!
//! Loads the `kbt.conf` configuration, configures the rotating logger
//! from it, and dispatches to the subcommand handlers.

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kitbag_log::Level;

use commands::{
    run_config, run_log, run_timestamp, run_tokens, run_version, ConfigArgs, LogArgs, TimestampArgs,
    TokensArgs,
};
use config::Config;
use error::{KbtError, Result};

/// Kbt - scanner and logger utilities
///
/// Kbt prints the effective configuration, writes log records through the
/// configured logger, parses timestamps and dumps scanner tokens.
#[derive(Parser, Debug)]
#[command(name = "kbt")]
#[command(author = "Kitbag Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scanner and logger utilities", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log at debug level regardless of the configuration
    #[arg(short, long, global = true, env = "KBT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KBT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kbt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the effective configuration
    Config(ConfigCommand),

    /// Append a record to the configured log
    Log(LogCommand),

    /// Parse a timestamp and print it in RFC 3339 form
    Timestamp(TimestampCommand),

    /// Print the tokens of a file with their line numbers
    Tokens(TokensCommand),

    /// Print version and compile stamp
    Version,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the log subcommand.
#[derive(Parser, Debug)]
struct LogCommand {
    /// Record level (debug, info, start, exit, warning, error)
    #[arg(short, long, default_value = "info")]
    level: String,

    /// Message text
    #[arg(required = true)]
    message: Vec<String>,
}

/// Arguments for the timestamp subcommand.
#[derive(Parser, Debug)]
struct TimestampCommand {
    /// Timestamp text, for example `Mon, 02 Jan 2006 15:04:05 -0700`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    text: Vec<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// File to scan
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    install_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;
    apply_logging_config(cli.verbose, &config)?;

    execute_command(cli.command, &config)
}

/// Routes the `log` macros to the global logger, still on standard error,
/// so configuration loading is traced under `--verbose`.
fn install_logging(verbose: bool) -> Result<()> {
    kitbag_log::global().set_level(startup_level(verbose));
    kitbag_log::install_log_facade()
        .map_err(|e| KbtError::Config(format!("Failed to initialize logging: {}", e)))?;
    Ok(())
}

/// Moves the global logger to the configured settings.
fn apply_logging_config(verbose: bool, config: &Config) -> Result<()> {
    let mut settings = config.to_log_settings()?;
    if verbose {
        settings.level = Level::Debug;
    }
    kitbag_log::configure(&settings);
    Ok(())
}

fn startup_level(verbose: bool) -> Level {
    if verbose {
        Level::Debug
    } else {
        Level::Info
    }
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Commands::Config(args) => run_config(ConfigArgs { json: args.json }, config, &mut out),
        Commands::Log(args) => run_log(LogArgs {
            level: args.level,
            message: args.message,
        }),
        Commands::Timestamp(args) => run_timestamp(TimestampArgs { text: args.text }, &mut out),
        Commands::Tokens(args) => run_tokens(TokensArgs { file: args.file }, &mut out),
        Commands::Version => run_version(&mut out),
    }
}
