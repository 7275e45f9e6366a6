//! Stack capture for error reports and function-name tracing.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

use crate::level::Level;
use crate::logger::Logger;
use crate::record::truncate_chars;

/// Largest stack trace written with [`Logger::log_stack_with_error`].
pub const MAX_STACK_BYTES: usize = 64_000;

const FILE_WIDTH: usize = 26;

/// Cuts `s` to at most `max` bytes without splitting a character.
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

struct Frame {
    function: String,
    location: Option<(String, u32)>,
}

/// Splits the text form of a backtrace into frames.
///
/// Frame headers look like `  3: crate::module::function` and are followed
/// by an optional `at path/to/file.rs:42:17` line.
fn parse_frames(trace: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in trace.lines() {
        let line = line.trim_start();
        if let Some(location) = line.strip_prefix("at ") {
            let mut parts = location.rsplitn(3, ':');
            let (_column, line_no, path) = (parts.next(), parts.next(), parts.next());
            if let (Some(frame), Some(line_no), Some(path)) = (frames.last_mut(), line_no, path) {
                if frame.location.is_none() {
                    if let Ok(line_no) = line_no.parse() {
                        frame.location = Some((path.to_string(), line_no));
                    }
                }
            }
        } else if let Some((index, function)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(Frame {
                    function: function.to_string(),
                    location: None,
                });
            }
        }
    }
    frames
}

/// Returns the caller's stack, one `<file>:<line>` per line.
///
/// File names are cut to 26 characters. `skip` drops that many frames
/// above the caller; frames without source information are left out.
pub fn pretty_stack_string(skip: usize) -> String {
    let trace = Backtrace::force_capture().to_string();
    let frames = parse_frames(&trace);
    let start = frames
        .iter()
        .position(|frame| frame.function.contains("pretty_stack_string"))
        .map_or(0, |index| index + 1);

    let mut pretty = String::new();
    for frame in frames.iter().skip(start + skip) {
        if let Some((path, line)) = &frame.location {
            let name = kitbag_util::path::base_name(path);
            pretty.push_str(&format!("{}:{}\n", truncate_chars(name, FILE_WIDTH), line));
        }
    }
    pretty
}

/// Shortens a full type path to its last two segments,
/// `kitbag_log::stack::tests::probe` becoming `tests::probe`.
pub fn short_function_name(name: &str) -> &str {
    let name = name.trim_end_matches("::{{closure}}");
    match name.rmatch_indices("::").nth(1) {
        Some((index, _)) => &name[index + 2..],
        None => name,
    }
}

/// Expands to the short name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn probe() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(probe);
        $crate::stack::short_function_name(name.strip_suffix("::probe").unwrap_or(name))
    }};
}

/// Writes a debug record naming the enclosing function.
#[macro_export]
macro_rules! log_function_name {
    () => {
        $crate::global().log_at(
            $crate::Level::Debug,
            file!(),
            line!(),
            format_args!("Function {}.", $crate::function_name!()),
        )
    };
}

impl Logger {
    /// Writes `err` and the current stack as two error records.
    #[track_caller]
    pub fn log_stack_with_error(&self, err: &dyn fmt::Display) {
        let caller = Location::caller();
        let trace = Backtrace::force_capture().to_string();
        let trace = truncate_bytes(&trace, MAX_STACK_BYTES);
        self.log_at(Level::Error, caller.file(), caller.line(), format_args!("'{}'.", err));
        self.log_at(
            Level::Error,
            caller.file(),
            caller.line(),
            format_args!("Stack of {} bytes: {}.", trace.len(), trace),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "   0: std::backtrace::Backtrace::create
             at /rustc/abc/library/std/src/backtrace.rs:331:13
   1: kitbag_log::stack::pretty_stack_string
             at ./src/stack.rs:70:17
   2: kitbag_log::stack::tests::caller
             at ./src/stack.rs:150:9
   3: core::ops::function::FnOnce::call_once
   4: std::rt::lang_start
             at /rustc/abc/library/std/src/rt.rs:205:17
";

    #[test]
    fn test_parse_frames() {
        let frames = parse_frames(SAMPLE);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[1].function, "kitbag_log::stack::pretty_stack_string");
        assert_eq!(frames[2].location, Some(("./src/stack.rs".to_string(), 150)));
        assert!(frames[3].location.is_none());
    }

    #[test]
    fn test_pretty_stack_lines_are_file_and_line() {
        let pretty = pretty_stack_string(0);
        for line in pretty.lines() {
            let (file, number) = line.rsplit_once(':').unwrap();
            assert!(!file.is_empty());
            assert!(file.chars().count() <= FILE_WIDTH);
            assert!(number.parse::<u32>().is_ok(), "{}", line);
        }
    }

    #[test]
    fn test_truncate_bytes_keeps_char_boundary() {
        assert_eq!(truncate_bytes("héllo", 2), "h");
        assert_eq!(truncate_bytes("héllo", 3), "hé");
        assert_eq!(truncate_bytes("abc", 10), "abc");
    }

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("kitbag_log::stack::tests::probe"), "tests::probe");
        assert_eq!(short_function_name("main"), "main");
        assert_eq!(short_function_name("app::run::{{closure}}"), "app::run");
    }

    #[test]
    fn test_function_name_macro() {
        assert_eq!(crate::function_name!(), "tests::test_function_name_macro");
    }

    #[test]
    fn test_log_stack_with_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stack.log");
        let logger = Logger::new();
        logger.set_filename(path.to_str().unwrap());

        logger.log_stack_with_error(&"disk on fire");

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Error: 'disk on fire'."));
        assert!(lines[1].contains("Error: Stack of "));
        assert!(lines[1].contains(" bytes: "));
    }
}
