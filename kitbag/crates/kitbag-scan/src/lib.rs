//! kitbag-scan - Scanner and record binder for configuration text
//!
//! The [`Scanner`] reads tokens from line-oriented text: identifiers,
//! integers, floats, booleans, quoted and bare strings, punctuation, SQL
//! strings and timestamps in several layouts. `#` starts a comment that runs
//! to the end of the line.
//!
//! The [`bind`] module fills typed records from `identifier value` pairs:
//!
//! ```
//! use kitbag_scan::{scan_record, Scanner};
//!
//! #[derive(Debug, Default)]
//! struct Settings {
//!     log_file: String,
//!     tee_stderr: bool,
//! }
//! scan_record!(Settings { log_file, tee_stderr });
//!
//! let mut settings = Settings::default();
//! let mut scanner = Scanner::new("log-file \"/var/log/app.log\"\ntee-stderr yes\n");
//! scanner.scan_record(&mut settings).unwrap();
//! assert_eq!(settings.log_file, "/var/log/app.log");
//! assert!(settings.tee_stderr);
//! ```

pub mod bind;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod sql;
pub mod timestamp;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use bind::{BindOutcome, FieldSlot, ScanRecord};
pub use error::{ScanError, ScanResult};
pub use scanner::Scanner;
pub use timestamp::time_from_string;
