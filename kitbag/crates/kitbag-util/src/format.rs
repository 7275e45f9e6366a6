//! Human-readable formatting and small string helpers.

use std::cmp::Ordering;
use std::time::Duration;

const BYTE_SUFFIXES: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count with a binary-scaled suffix.
///
/// Counts below 1024 are printed exactly; larger counts with two decimals.
///
/// ```
/// use kitbag_util::format::human_bytes;
///
/// assert_eq!(human_bytes(123), "123 B");
/// assert_eq!(human_bytes(1234), "1.21 KB");
/// ```
pub fn human_bytes(bytes: i64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut index = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && index < BYTE_SUFFIXES.len() - 1 {
        index += 1;
        scaled /= 1024.0;
    }
    format!("{:.2} {}", scaled, BYTE_SUFFIXES[index])
}

/// Formats an integer with comma thousands separators.
///
/// ```
/// use kitbag_util::format::human_int;
///
/// assert_eq!(human_int(-1234567), "-1,234,567");
/// ```
pub fn human_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }

    let mut remaining = digits.len();
    for c in digits.chars() {
        out.push(c);
        remaining -= 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

struct Parts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: f64,
}

fn split_duration(duration: Duration) -> Parts {
    let whole = duration.as_secs();
    Parts {
        days: whole / 86_400,
        hours: (whole / 3_600) % 24,
        minutes: (whole / 60) % 60,
        seconds: (whole % 60) as f64 + f64::from(duration.subsec_nanos()) / 1e9,
    }
}

/// Formats a duration like `1 day 2:03:04.5 hours`.
pub fn human_duration(duration: Duration) -> String {
    let p = split_duration(duration);
    match p.days {
        1 => format!("1 day {}:{:02}:{:04.1} hours", p.hours, p.minutes, p.seconds),
        d if d > 1 => format!("{} days {}:{:02}:{:04.1} hours", d, p.hours, p.minutes, p.seconds),
        _ if p.hours > 0 => format!("{}:{:02}:{:04.1} hours", p.hours, p.minutes, p.seconds),
        _ if p.minutes > 0 => format!("{}:{:04.1} minutes", p.minutes, p.seconds),
        _ => format!("{:.3} seconds", p.seconds),
    }
}

/// Formats a duration compactly, like `1 day 2:03` or `2:03:04`.
pub fn human_duration_brief(duration: Duration) -> String {
    let p = split_duration(duration);
    match p.days {
        1 => format!("1 day {}:{:02}", p.hours, p.minutes),
        d if d > 1 => format!("{} days {}:{:02}", d, p.hours, p.minutes),
        _ if p.hours > 0 => format!("{}:{:02}:{:02.0}", p.hours, p.minutes, p.seconds.floor()),
        _ if p.minutes > 0 => format!("{}:{:02.0}", p.minutes, p.seconds.floor()),
        _ => format!("0:{:02.0}", p.seconds.floor()),
    }
}

/// Compares dotted version strings component by component.
///
/// Components compare numerically; a missing component counts as zero, and
/// so does one that is not a number.
///
/// ```
/// use std::cmp::Ordering;
/// use kitbag_util::format::compare_version_strings;
///
/// assert_eq!(compare_version_strings("1.2.00.00", "1.2"), Ordering::Equal);
/// assert_eq!(compare_version_strings("1.02.1", "1.020.2"), Ordering::Less);
/// ```
pub fn compare_version_strings(left: &str, right: &str) -> Ordering {
    let mut left = left.split('.');
    let mut right = right.split('.');
    loop {
        let (a, b) = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (a, b) => (component(a), component(b)),
        };
        match a.cmp(&b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
}

fn component(part: Option<&str>) -> u64 {
    part.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}

/// Returns at most the first `n` characters of `s`.
pub fn first_n_runes(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Shortens `s` to at most `max_length` bytes at a word boundary.
///
/// When words are dropped, `...` is appended if it still fits.
pub fn truncate_string_to_length(s: &str, max_length: usize) -> String {
    if s.len() < max_length {
        return s.to_string();
    }

    let mut result = String::new();
    for word in s.split(' ') {
        if result.len() + word.len() + 3 <= max_length {
            result.push_str(word);
            result.push(' ');
        } else {
            let trimmed_len = result.trim_end_matches(' ').len();
            result.truncate(trimmed_len);
            if result.len() + 3 <= max_length {
                result.push_str("...");
            }
            return result;
        }
    }
    result
}

/// Keeps only the characters of `input` that appear in `set`.
pub fn string_including_characters_in_set(input: &str, set: &str) -> String {
    input.chars().filter(|c| set.contains(*c)).collect()
}

/// Drops the characters of `input` that appear in `set`.
pub fn string_excluding_characters_in_set(input: &str, set: &str) -> String {
    input.chars().filter(|c| !set.contains(*c)).collect()
}

/// Replaces every character of `input` not in `set` with `replacement`.
pub fn replace_characters_not_in_set(input: &str, set: &str, replacement: char) -> String {
    input
        .chars()
        .map(|c| if set.contains(c) { c } else { replacement })
        .collect()
}
