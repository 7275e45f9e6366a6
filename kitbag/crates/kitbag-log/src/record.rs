//! Rendering of a single log line.

use chrono::{DateTime, Local, SecondsFormat};

use crate::level::Level;

/// Maximum width of the file part of a source tag.
const FILE_WIDTH: usize = 26;

/// Renders one record:
/// `<RFC 3339 time> <dir/file, right-aligned in 26>:<line, left-aligned in 4> <label>: <message>`.
pub fn format_line(time: &DateTime<Local>, file: &str, line: u32, level: Level, message: &str) -> String {
    format!(
        "{} {:>26}:{:<4} {}: {}\n",
        time.to_rfc3339_opts(SecondsFormat::Secs, true),
        source_tag(file),
        line,
        level.label(),
        flatten(message),
    )
}

/// Reduces a source path to `<parent dir>/<file name>`, the file name cut
/// to 26 characters.
pub fn source_tag(file: &str) -> String {
    let file = file.replace('\\', "/");
    let (dir, name) = match file.rfind('/') {
        Some(index) => (&file[..index], &file[index + 1..]),
        None => ("", file.as_str()),
    };
    let dir = kitbag_util::path::base_name(dir);
    format!("{}/{}", dir, truncate_chars(name, FILE_WIDTH))
}

/// Cuts `s` to at most `max` characters.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Replaces line breaks so a record stays on one line.
fn flatten(message: &str) -> String {
    message.replace(['\n', '\r'], "|")
}
