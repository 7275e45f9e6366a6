//! Time-based rotation of the live log and pruning of old archives.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use kitbag_util::path::split_extension;

use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::logger::LoggerState;

/// Returns the first multiple of `interval` since the Unix epoch that lies
/// strictly after `now`, or `None` when rotation is disabled.
pub(crate) fn next_rotation_after(now: &DateTime<Local>, interval: Duration) -> Option<DateTime<Local>> {
    let step = i64::try_from(interval.as_secs()).ok().filter(|step| *step > 0)?;
    let next = now.timestamp().div_euclid(step).checked_add(1)?.checked_mul(step)?;
    Local.timestamp_opt(next, 0).single()
}

/// Builds `<dir>/<stem>-<time><ext>` for the live log at `live`.
///
/// Every character of the RFC 3339 time that is not a letter or digit
/// becomes `-`, so `app.log` rotated at midnight UTC archives as
/// `app-2020-02-03T00-00-00Z.log`.
pub fn archive_path(live: &Path, time: &DateTime<Local>) -> PathBuf {
    let name = live
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&name);
    let stamp: String = time
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    live.with_file_name(format!("{}-{}{}", stem, stamp, ext))
}

/// Lists the archives of `live` in its directory, oldest first.
fn list_archives(live: &Path) -> LogResult<Vec<PathBuf>> {
    let dir = live.parent().unwrap_or_else(|| Path::new("."));
    let name = live
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let prefix = format!("{}-", split_extension(&name).0);

    let entries = fs::read_dir(dir).map_err(|source| LogError::List {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|kind| kind.is_file()).unwrap_or(false))
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
        .map(|entry| entry.path())
        .filter(|path| path.as_path() != live)
        .collect();
    archives.sort();
    Ok(archives)
}

impl LoggerState {
    /// Renames the live log to its archive name, reopens it, and prunes
    /// archives beyond the retention count.
    ///
    /// Runs with the write lock held, so every record it produces goes
    /// through [`LoggerState::emit`] directly.
    pub(crate) fn rotate(&mut self, now: DateTime<Local>) {
        if self.filename.as_os_str().is_empty() {
            return;
        }

        let stamp = match self.next_rotation {
            Some(at) if at <= now => at,
            _ => now,
        };
        let live = self.filename.clone();
        let archive = archive_path(&live, &stamp);

        self.close();
        if let Err(source) = fs::rename(&live, &archive) {
            self.fall_back_to_stderr(&LogError::Rename {
                from: live,
                to: archive,
                source,
            });
            return;
        }

        self.open();
        if self.filename.as_os_str().is_empty() {
            return;
        }

        self.emit(&now, Level::Info, file!(), line!(), &format!("Log rotated to '{}'.", archive.display()));
        self.emit(&now, Level::Info, file!(), line!(), &format!("Log continues in '{}'.", live.display()));
        self.prune(&now);
    }

    fn prune(&self, now: &DateTime<Local>) {
        let archives = match list_archives(&self.filename) {
            Ok(archives) => archives,
            Err(err) => {
                self.emit(now, Level::Error, file!(), line!(), &err.to_string());
                return;
            }
        };

        let excess = archives.len().saturating_sub(self.retention_count);
        for path in &archives[..excess] {
            self.emit(now, Level::Info, file!(), line!(), &format!("Removing old log '{}'.", path.display()));
            if let Err(err) = fs::remove_file(path) {
                self.emit(
                    now,
                    Level::Error,
                    file!(),
                    line!(),
                    &format!("Can't remove log file '{}': {}.", path.display(), err),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_next_rotation_is_aligned_and_after_now() {
        let now = Local.timestamp_opt(1_580_745_764, 0).unwrap();
        let next = next_rotation_after(&now, Duration::from_secs(3600)).unwrap();
        assert_eq!(next.timestamp() % 3600, 0);
        assert!(next > now);
        assert!(next.timestamp() - now.timestamp() <= 3600);
    }

    #[test]
    fn test_next_rotation_on_boundary_moves_forward() {
        let now = Local.timestamp_opt(1_580_688_000, 0).unwrap();
        let next = next_rotation_after(&now, Duration::from_secs(86_400)).unwrap();
        assert_eq!(next.timestamp(), 1_580_688_000 + 86_400);
    }

    #[test]
    fn test_zero_interval_disables_rotation() {
        let now = Local::now();
        assert!(next_rotation_after(&now, Duration::ZERO).is_none());
        assert!(next_rotation_after(&now, Duration::from_millis(500)).is_none());
    }

    #[test]
    fn test_archive_path() {
        let time = Utc.with_ymd_and_hms(2020, 2, 3, 0, 0, 0).unwrap().with_timezone(&Local);
        let archive = archive_path(Path::new("/var/log/app.log"), &time);
        let stamp: String = time
            .to_rfc3339_opts(SecondsFormat::Secs, true)
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        assert_eq!(archive, PathBuf::from(format!("/var/log/app-{}.log", stamp)));
        assert!(!stamp.contains(':'));
    }

    #[test]
    fn test_archive_path_without_extension() {
        let time = Local::now();
        let archive = archive_path(Path::new("/tmp/server"), &time);
        let name = archive.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("server-"));
        assert!(!name.contains('.'));
    }
}
