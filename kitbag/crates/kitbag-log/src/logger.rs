//! The logger: severity filter, sink management and the emit path.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};
use parking_lot::RwLock;

use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::record::format_line;
use crate::rotation::next_rotation_after;

/// Default time between rotations.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default number of archived logs kept after a rotation.
pub const DEFAULT_RETENTION_COUNT: usize = 1;

/// Everything that configures a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Minimum level written.
    pub level: Level,
    /// Also copy every record to standard error.
    pub tee_stderr: bool,
    /// Log file; empty for standard error.
    pub filename: String,
    /// Time between rotations; zero disables rotation.
    pub rotation_interval: Duration,
    /// Archives kept after each rotation.
    pub retention_count: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Level::Info,
            tee_stderr: false,
            filename: String::new(),
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            retention_count: DEFAULT_RETENTION_COUNT,
        }
    }
}

pub(crate) enum Sink {
    Stderr,
    File(File),
}

pub(crate) struct LoggerState {
    pub(crate) level: Level,
    pub(crate) tee_stderr: bool,
    /// Absolute path of the live log, or empty for standard error.
    pub(crate) filename: PathBuf,
    pub(crate) sink: Sink,
    pub(crate) next_rotation: Option<DateTime<Local>>,
    pub(crate) rotation_interval: Duration,
    pub(crate) retention_count: usize,
}

impl LoggerState {
    fn new() -> Self {
        Self {
            level: Level::Info,
            tee_stderr: false,
            filename: PathBuf::new(),
            sink: Sink::Stderr,
            next_rotation: None,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            retention_count: DEFAULT_RETENTION_COUNT,
        }
    }

    /// Opens the live log for appending, or falls back to standard error.
    pub(crate) fn open(&mut self) {
        self.next_rotation = None;
        if self.filename.as_os_str().is_empty() {
            self.sink = Sink::Stderr;
            return;
        }

        match open_append(&self.filename) {
            Ok(file) => {
                self.sink = Sink::File(file);
                self.next_rotation = next_rotation_after(&Local::now(), self.rotation_interval);
            }
            Err(err) => self.fall_back_to_stderr(&err),
        }
    }

    pub(crate) fn close(&mut self) {
        if let Sink::File(file) = &mut self.sink {
            let _ = file.flush();
        }
        self.sink = Sink::Stderr;
    }

    pub(crate) fn fall_back_to_stderr(&mut self, err: &LogError) {
        self.filename = PathBuf::new();
        self.sink = Sink::Stderr;
        self.next_rotation = None;
        self.emit(&Local::now(), Level::Error, file!(), line!(), &err.to_string());
    }

    pub(crate) fn rotation_due(&self, now: &DateTime<Local>) -> bool {
        self.next_rotation.is_some_and(|at| *now >= at)
    }

    /// Writes one record without taking any lock.
    pub(crate) fn emit(&self, time: &DateTime<Local>, level: Level, file: &str, line: u32, message: &str) {
        if level < self.level {
            return;
        }
        let text = format_line(time, file, line, level.coerce(), message);
        match &self.sink {
            Sink::File(file) => {
                let mut writer: &File = file;
                let _ = writer.write_all(text.as_bytes());
                if self.tee_stderr {
                    let _ = io::stderr().write_all(text.as_bytes());
                }
            }
            Sink::Stderr => {
                let _ = io::stderr().write_all(text.as_bytes());
            }
        }
    }
}

fn open_append(path: &Path) -> LogResult<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        create_private_dir(dir).map_err(|source| LogError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}

fn resolve_filename(filename: &str) -> PathBuf {
    if filename.trim().is_empty() {
        PathBuf::new()
    } else {
        kitbag_util::path::absolute_path(filename)
    }
}

/// A rotating, severity-filtered line logger.
///
/// Each record is one line:
///
/// ```text
/// 2020-02-03T16:02:44-08:00               src/main.rs:42    Info: Listening on port 8080.
/// ```
///
/// Records go to the configured file, or to standard error when no file is
/// set or the file cannot be opened. When a rotation instant passes the
/// live file is renamed to `<stem>-<time><ext>` and a fresh one is started.
///
/// All methods take `&self`; the logger can be shared between threads.
pub struct Logger {
    pub(crate) state: RwLock<LoggerState>,
}

impl Logger {
    /// Creates a logger writing to standard error with default settings.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoggerState::new()),
        }
    }

    /// Creates a logger and applies `settings`.
    pub fn with_settings(settings: &LogSettings) -> Self {
        let logger = Self::new();
        logger.configure(settings);
        logger
    }

    /// Applies every field of `settings` at once.
    pub fn configure(&self, settings: &LogSettings) {
        let filename = resolve_filename(&settings.filename);
        let mut state = self.state.write();
        state.level = settings.level;
        state.tee_stderr = settings.tee_stderr;
        state.rotation_interval = settings.rotation_interval;
        state.retention_count = settings.retention_count;

        if filename != state.filename {
            state.close();
            state.filename = filename;
            state.open();
        } else if matches!(state.sink, Sink::File(_)) {
            state.next_rotation = next_rotation_after(&Local::now(), settings.rotation_interval);
        }
    }

    /// Returns the current settings.
    pub fn settings(&self) -> LogSettings {
        let state = self.state.read();
        LogSettings {
            level: state.level,
            tee_stderr: state.tee_stderr,
            filename: state.filename.display().to_string(),
            rotation_interval: state.rotation_interval,
            retention_count: state.retention_count,
        }
    }

    /// Returns the minimum level written.
    pub fn level(&self) -> Level {
        self.state.read().level
    }

    /// Sets the minimum level written. Records below it are dropped before
    /// they are formatted.
    pub fn set_level(&self, level: Level) {
        self.state.write().level = level;
    }

    /// Returns whether file records are also copied to standard error.
    pub fn tee_stderr(&self) -> bool {
        self.state.read().tee_stderr
    }

    /// Copies every record written to the log file to standard error too.
    /// Has no effect while the sink is standard error.
    pub fn set_tee_stderr(&self, tee: bool) {
        self.state.write().tee_stderr = tee;
    }

    /// Returns the absolute path of the live log, empty for standard error.
    pub fn filename(&self) -> PathBuf {
        self.state.read().filename.clone()
    }

    /// Sends records to `filename`, resolved to an absolute path.
    ///
    /// An empty name selects standard error. Setting the current file again
    /// does nothing.
    pub fn set_filename(&self, filename: impl AsRef<str>) {
        let filename = resolve_filename(filename.as_ref());
        let mut state = self.state.write();
        if filename == state.filename {
            return;
        }
        state.close();
        state.filename = filename;
        state.open();
    }

    /// Returns the time between rotations.
    pub fn rotation_interval(&self) -> Duration {
        self.state.read().rotation_interval
    }

    /// Sets the time between rotations and reschedules the next one.
    pub fn set_rotation_interval(&self, interval: Duration) {
        let mut state = self.state.write();
        state.rotation_interval = interval;
        if matches!(state.sink, Sink::File(_)) {
            state.next_rotation = next_rotation_after(&Local::now(), interval);
        }
    }

    /// Returns how many archives are kept after a rotation.
    pub fn retention_count(&self) -> usize {
        self.state.read().retention_count
    }

    /// Sets how many archives are kept. Takes effect at the next rotation.
    pub fn set_retention_count(&self, count: usize) {
        self.state.write().retention_count = count;
    }

    /// Returns when the live log will next be rotated.
    pub fn next_rotation(&self) -> Option<DateTime<Local>> {
        self.state.read().next_rotation
    }

    /// Flushes pending output by closing and reopening the live log.
    pub fn flush(&self) {
        let mut state = self.state.write();
        state.close();
        state.open();
    }

    /// Rotates the live log now, whether or not a rotation is due.
    pub fn rotate(&self) {
        self.state.write().rotate(Local::now());
    }

    /// Writes a record attributed to `file` and `line`.
    ///
    /// This is the entry point for callers that know their own source
    /// location, such as the macros and the `log` facade.
    pub fn log_at(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if level < self.level() {
            return;
        }

        let now = Local::now();
        let due = self.state.read().rotation_due(&now);
        if due {
            let mut state = self.state.write();
            if state.rotation_due(&now) {
                state.rotate(now);
            }
        }

        let message = args.to_string();
        self.state.read().emit(&now, level, file, line, &message);
    }

    #[track_caller]
    fn log_from_caller(&self, level: Level, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.log_at(level, caller.file(), caller.line(), args);
    }

    /// Writes a debug record attributed to the caller.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Debug, args);
    }

    /// Writes an informational record attributed to the caller.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Info, args);
    }

    /// Writes a start record, labelled `Start`.
    #[track_caller]
    pub fn start(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Start, args);
    }

    /// Writes an exit record, labelled ` Exit`.
    #[track_caller]
    pub fn exit(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Exit, args);
    }

    /// Writes a warning record attributed to the caller.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Warning, args);
    }

    /// Writes an error record attributed to the caller.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log_from_caller(Level::Error, args);
    }

    /// Writes `err` as an error record, followed by a period.
    #[track_caller]
    pub fn log_error(&self, err: &dyn fmt::Display) {
        self.log_from_caller(Level::Error, format_args!("{}.", err));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("tee_stderr", &state.tee_stderr)
            .field("filename", &state.filename)
            .field("next_rotation", &state.next_rotation)
            .finish()
    }
}
