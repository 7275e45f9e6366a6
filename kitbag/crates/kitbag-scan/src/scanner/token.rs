//! Identifier, boolean, punctuation and generic token scanning.

use crate::error::{ScanError, ScanResult};
use crate::unicode::{is_ident_continue, is_ident_start, is_punct};
use crate::Scanner;

impl Scanner {
    /// Scans an identifier: a letter or `_`, then letters, digits, `-`, `_`.
    pub fn scan_identifier(&mut self) -> ScanResult<String> {
        self.check()?;
        self.skip_spaces();
        let Some(c) = self.cursor.peek() else {
            return Err(ScanError::EndOfInput);
        };
        if !is_ident_start(c) {
            self.scan_next()?;
            return Err(self.set_error_message("Expected an identifier"));
        }
        self.token = self.cursor.take_while(is_ident_continue);
        Ok(self.token.clone())
    }

    /// Scans a boolean.
    ///
    /// `true yes t y 1` and `false no f n 0` are accepted in any case.
    pub fn scan_bool(&mut self) -> ScanResult<bool> {
        let word = self.scan_next()?.to_lowercase();
        match word.as_str() {
            "true" | "yes" | "t" | "y" | "1" => Ok(true),
            "false" | "no" | "f" | "n" | "0" => Ok(false),
            _ => Err(self.set_error_message("Expected a boolean value")),
        }
    }

    /// Scans a single punctuation character.
    pub fn scan_punct(&mut self) -> ScanResult<char> {
        self.check()?;
        self.skip_spaces();
        let Some(c) = self.cursor.peek() else {
            return Err(ScanError::EndOfInput);
        };
        if !is_punct(c) {
            self.scan_next()?;
            return Err(self.set_error_message("Punctuation expected"));
        }
        self.cursor.advance();
        self.token = c.to_string();
        Ok(c)
    }

    /// Scans the next token of whatever kind follows.
    ///
    /// A `"` starts a quoted string, punctuation is a token of its own, a
    /// digit starts an integer, and anything else is a bare string. The token
    /// text is returned.
    ///
    /// A character that can start none of these, such as a control
    /// character, is consumed and reported as `Unexpected character`.
    pub fn scan_next(&mut self) -> ScanResult<String> {
        self.check()?;
        self.skip_spaces();
        let Some(c) = self.cursor.peek() else {
            return Err(ScanError::EndOfInput);
        };

        if c == '"' {
            self.scan_quoted_string()
        } else if is_punct(c) {
            self.cursor.advance();
            self.token = c.to_string();
            Ok(self.token.clone())
        } else if self.next_rune_is_digit() {
            self.scan_integer()?;
            Ok(self.token.clone())
        } else {
            let word = self.scan_string()?;
            if word.is_empty() {
                self.cursor.advance();
                self.token = c.to_string();
                return Err(self.set_error_message("Unexpected character"));
            }
            Ok(word)
        }
    }
}
