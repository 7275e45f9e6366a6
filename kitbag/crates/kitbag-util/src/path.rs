//! Path resolution helpers.
//!
//! These functions work lexically: nothing here touches the filesystem except
//! the lookup of the home and working directories.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Returns the current user's home directory.
///
/// The operating system's account database is consulted first; the `HOME`
/// environment variable is the fallback. Returns an empty path when neither
/// is available.
pub fn home_path() -> PathBuf {
    dirs::home_dir()
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_default()
}

/// Resolves `path` to a clean absolute path.
///
/// Surrounding whitespace is trimmed, a leading `~` or `~/` is expanded to the
/// home directory, relative paths are joined to the working directory, and the
/// result is cleaned lexically.
///
/// # Example
///
/// ```
/// use kitbag_util::path::absolute_path;
///
/// let cwd = std::env::current_dir().unwrap();
/// assert_eq!(absolute_path("  ~ Home  "), cwd.join("~ Home"));
/// assert_eq!(absolute_path(""), cwd);
/// ```
pub fn absolute_path(path: &str) -> PathBuf {
    let path = path.trim();

    let expanded = if path == "~" {
        home_path()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home_path().join(rest)
    } else {
        PathBuf::from(path)
    };

    let joined = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir().unwrap_or_default().join(expanded)
    };

    clean_path(&joined)
}

/// Cleans a path lexically.
///
/// Repeated separators and `.` components are dropped, and each `..` removes
/// the preceding component. A `..` at the root stays at the root.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => cleaned.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    cleaned.pop();
                    depth -= 1;
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            Component::Normal(part) => {
                cleaned.push(part);
                depth += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Returns the last element of a slash-separated path.
///
/// Trailing slashes are removed first. An empty path yields `"."` and a path
/// of only slashes yields `"/"`.
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Splits a file name into its stem and its extension, dot included.
///
/// The extension starts at the final `.`; a name without one has an empty
/// extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) => name.split_at(index),
        None => (name, ""),
    }
}
