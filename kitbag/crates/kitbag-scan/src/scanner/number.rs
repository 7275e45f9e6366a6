//! Number scanning.

use crate::error::{ScanError, ScanResult};
use crate::unicode::is_digit;
use crate::Scanner;

impl Scanner {
    /// Scans a run of decimal digits as a signed 64-bit integer.
    ///
    /// Fails with `Integer expected` if no digit follows the spaces.
    pub fn scan_integer(&mut self) -> ScanResult<i64> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        if !self.next_rune_is_digit() {
            self.scan_next()?;
            return Err(self.set_error_message("Integer expected"));
        }

        self.token = self.cursor.take_while(is_digit);
        match self.token.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(self.set_error_message("Integer out of range")),
        }
    }

    /// Scans an integer that must fit in 32 bits.
    pub fn scan_i32(&mut self) -> ScanResult<i32> {
        let value = self.scan_integer()?;
        i32::try_from(value).map_err(|_| self.set_error_message("Integer out of range"))
    }

    /// Scans a run of octal digits.
    pub fn scan_octal(&mut self) -> ScanResult<i64> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }

        self.token = self.cursor.take_while(|c| c.is_digit(8));
        if self.token.is_empty() {
            self.scan_next()?;
            return Err(self.set_error_message("Octal number expected"));
        }
        i64::from_str_radix(&self.token, 8).map_err(|_| self.set_error_message("Octal number expected"))
    }

    /// Scans a floating-point number made of digits, `-` and `.`.
    pub fn scan_float(&mut self) -> ScanResult<f64> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }

        self.token = self
            .cursor
            .take_while(|c| is_digit(c) || c == '-' || c == '.');
        if self.token.is_empty() {
            self.scan_next()?;
        }
        match self.token.parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(self.set_error_message("Float expected")),
        }
    }
}
