//! SQL string literals.
//!
//! A SQL string is single-quoted and a doubled quote stands for one quote
//! character, so `'Don''t'` scans as `Don't`.

use crate::error::{ScanError, ScanResult};
use crate::Scanner;

impl Scanner {
    /// Scans a SQL string.
    ///
    /// A double-quoted string is scanned as by
    /// [`scan_quoted_string`](Self::scan_quoted_string) and anything not
    /// starting with a quote as a bare string. The character following the
    /// closing quote is left in the input.
    pub fn scan_sql_string(&mut self) -> ScanResult<String> {
        self.check()?;
        self.skip_spaces();
        match self.cursor.peek() {
            None => return Err(ScanError::EndOfInput),
            Some('"') => return self.scan_quoted_string(),
            Some('\'') => {}
            Some(_) => return self.scan_string(),
        }

        let start = self.cursor.position();
        self.cursor.advance();
        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                None => {
                    self.token = self.cursor.slice_from(start).to_string();
                    return Err(self.set_error_message("Unterminated SQL string"));
                }
                Some('\'') if self.cursor.match_char('\'') => value.push('\''),
                Some('\'') => break,
                Some(c) => value.push(c),
            }
        }

        self.token = value.clone();
        Ok(value)
    }
}
