//! Core scanner implementation.

use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::Path;

use kitbag_util::path::base_name;

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::unicode;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A scanner for line-oriented configuration text.
///
/// Every scan method skips leading white space and `#` comments first. A
/// failed scan records a sticky error: until [`clear_error`](Self::clear_error)
/// is called, every later scan returns that same error.
///
/// # Example
///
/// ```
/// use kitbag_scan::Scanner;
///
/// let mut scanner = Scanner::new("retries 3 # comment\nname \"kit bag\"");
/// assert_eq!(scanner.scan_identifier().unwrap(), "retries");
/// assert_eq!(scanner.scan_integer().unwrap(), 3);
/// assert_eq!(scanner.scan_identifier().unwrap(), "name");
/// assert_eq!(scanner.scan_quoted_string().unwrap(), "kit bag");
/// assert_eq!(scanner.line_number(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) cursor: Cursor,
    filename: String,
    pub(crate) token: String,
    last_error: Option<ScanError>,
}

impl Scanner {
    /// Creates a scanner over `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_filename(source, "")
    }

    /// Creates a scanner over `source`, reporting errors against `filename`.
    ///
    /// A leading byte order mark is dropped.
    pub fn with_filename(source: impl Into<String>, filename: impl Into<String>) -> Self {
        let mut source = source.into();
        if source.starts_with(BYTE_ORDER_MARK) {
            source.drain(..BYTE_ORDER_MARK.len_utf8());
        }
        Self {
            cursor: Cursor::new(source),
            filename: filename.into(),
            token: String::new(),
            last_error: None,
        }
    }

    /// Creates a scanner over everything `reader` yields.
    pub fn from_reader<R: Read>(mut reader: R, filename: impl Into<String>) -> ScanResult<Self> {
        let filename = filename.into();
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|e| ScanError::Read {
                path: filename.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self::with_filename(source, filename))
    }

    /// Opens and reads the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let filename = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|e| ScanError::Read {
            path: filename.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::with_filename(source, filename))
    }

    /// Returns the file name given at construction.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the current line number (1-based).
    pub fn line_number(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the last token scanned.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the sticky error, if any.
    pub fn last_error(&self) -> Option<&ScanError> {
        self.last_error.as_ref()
    }

    /// Returns true when the input is exhausted or an error is pending.
    pub fn is_at_end(&self) -> bool {
        self.last_error.is_some() || self.cursor.is_at_end()
    }

    /// Clears the sticky error so scanning can resume.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Records a syntax error framed with the file, line and last token.
    pub fn set_error_message(&mut self, message: impl Into<String>) -> ScanError {
        let err = ScanError::Syntax {
            file: base_name(&self.filename).to_string(),
            line: self.cursor.line(),
            token: self.token.clone(),
            message: message.into(),
        };
        self.last_error = Some(err.clone());
        err
    }

    /// Records `err` as a framed syntax error.
    pub fn set_error(&mut self, err: impl Display) -> ScanError {
        self.set_error_message(err.to_string())
    }

    /// Records an error that is already in its final form.
    pub(crate) fn fail(&mut self, err: ScanError) -> ScanError {
        self.last_error = Some(err.clone());
        err
    }

    /// Returns the sticky error, if one is pending.
    pub(crate) fn check(&self) -> ScanResult<()> {
        match &self.last_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Returns the next character without consuming it.
    pub fn next_rune(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Returns true if the next character is a decimal digit.
    pub fn next_rune_is_digit(&self) -> bool {
        self.cursor.peek().is_some_and(unicode::is_digit)
    }

    /// Returns true if the next character is punctuation.
    pub fn next_rune_is_punct(&self) -> bool {
        self.cursor.peek().is_some_and(unicode::is_punct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    #[test]
    fn test_error_is_framed_and_sticky() {
        let mut scanner = Scanner::with_filename("maybe 12", "/etc/app.conf");
        let err = scanner.scan_bool().unwrap_err();
        assert_eq!(err.to_string(), "app.conf:1 Scanned 'maybe'. Expected a boolean value");

        assert_eq!(scanner.scan_integer().unwrap_err(), err);
        assert!(scanner.is_at_end());

        scanner.clear_error();
        assert_eq!(scanner.scan_integer().unwrap(), 12);
    }

    #[test]
    fn test_from_reader() {
        let mut scanner = Scanner::from_reader(IoCursor::new("word"), "mem").unwrap();
        assert_eq!(scanner.filename(), "mem");
        assert_eq!(scanner.scan_string().unwrap(), "word");
    }

    #[test]
    fn test_open_missing_file() {
        let err = Scanner::open("/nonexistent/kitbag/app.conf").unwrap_err();
        assert!(matches!(err, ScanError::Read { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        fs::write(&path, "# only a comment\n\nflag yes\n").unwrap();

        let mut scanner = Scanner::open(&path).unwrap();
        assert_eq!(scanner.scan_identifier().unwrap(), "flag");
        assert!(scanner.scan_bool().unwrap());
        assert_eq!(scanner.line_number(), 3);
    }

    #[test]
    fn test_next_rune_predicates() {
        let scanner = Scanner::new("7;");
        assert_eq!(scanner.next_rune(), Some('7'));
        assert!(scanner.next_rune_is_digit());
        assert!(!scanner.next_rune_is_punct());
    }

    #[test]
    fn test_leading_byte_order_mark_is_dropped() {
        let mut scanner = Scanner::new("\u{FEFF}name 1\n");
        assert_eq!(scanner.scan_next().unwrap(), "name");
        assert_eq!(scanner.scan_integer().unwrap(), 1);
        assert_eq!(scanner.scan_next(), Err(ScanError::EndOfInput));
    }

    #[test]
    fn test_open_file_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.conf");
        fs::write(&path, "\u{FEFF}flag yes\n").unwrap();

        let mut scanner = Scanner::open(&path).unwrap();
        assert_eq!(scanner.scan_identifier().unwrap(), "flag");
        assert!(scanner.scan_bool().unwrap());
    }
}
