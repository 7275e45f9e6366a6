//! White space and comment skipping.

use crate::cursor::is_line_feed;
use crate::error::{ScanError, ScanResult};
use crate::unicode::is_space;
use crate::Scanner;

impl Scanner {
    /// Skips white space and comments.
    ///
    /// A comment runs from `#` up to the next line feed.
    pub(crate) fn skip_spaces(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c == '#' {
                while self.cursor.peek().is_some_and(|c| !is_line_feed(c)) {
                    self.cursor.advance();
                }
            } else if is_space(c) {
                self.cursor.advance();
            } else {
                return;
            }
        }
    }

    /// Skips white space and comments.
    ///
    /// Returns [`ScanError::EndOfInput`] when nothing but space remains.
    pub fn scan_spaces(&mut self) -> ScanResult<()> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        Ok(())
    }

    /// Scans the rest of the current line, trimmed.
    ///
    /// The line feed itself is left in the input.
    pub fn scan_to_eol(&mut self) -> ScanResult<String> {
        self.check()?;
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        let line = self.cursor.take_while(|c| !is_line_feed(c));
        self.token = line.trim().to_string();
        Ok(self.token.clone())
    }
}
