//! Quoted and bare string scanning.

use crate::cursor::is_line_feed;
use crate::error::{ScanError, ScanResult};
use crate::unicode::is_string_rune;
use crate::Scanner;

impl Scanner {
    /// Scans a bare string: a run of graphic characters other than `;`, `,`
    /// and white space.
    ///
    /// The run may be empty when the next character cannot start one.
    pub fn scan_string(&mut self) -> ScanResult<String> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        self.token = self.cursor.take_while(is_string_rune);
        Ok(self.token.clone())
    }

    /// Scans a double-quoted string and returns its unescaped contents.
    ///
    /// Supports the escapes `\a \b \f \n \r \t \v \\ \" \'`, `\xHH`, three
    /// digit octal `\ooo`, `\uHHHH` and `\UHHHHHHHH`.
    pub fn scan_quoted_string(&mut self) -> ScanResult<String> {
        self.check()?;
        self.skip_spaces();
        if self.cursor.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        if self.cursor.peek() != Some('"') {
            self.token = self.cursor.take_while(is_string_rune);
            if self.token.is_empty() {
                if let Some(c) = self.cursor.advance() {
                    self.token = c.to_string();
                }
            }
            return Err(self.set_error_message("Quoted string expected"));
        }

        let start = self.cursor.position();
        self.cursor.advance();
        let mut value = String::new();
        loop {
            let c = match self.cursor.advance() {
                None => return Err(self.quote_error(start, "Unterminated quoted string")),
                Some(c) if is_line_feed(c) => {
                    return Err(self.quote_error(start, "Unterminated quoted string"))
                }
                Some(c) => c,
            };
            match c {
                '"' => break,
                '\\' => match self.scan_escape() {
                    Some(escaped) => value.push(escaped),
                    None => return Err(self.quote_error(start, "Invalid escape in quoted string")),
                },
                _ => value.push(c),
            }
        }

        self.token = value.clone();
        Ok(value)
    }

    fn quote_error(&mut self, start: usize, message: &str) -> ScanError {
        self.token = self.cursor.slice_from(start).to_string();
        self.set_error_message(message)
    }

    fn scan_escape(&mut self) -> Option<char> {
        let c = self.cursor.advance()?;
        let simple = match c {
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{B}',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'x' => return self.scan_hex_escape(2),
            'u' => return self.scan_hex_escape(4),
            'U' => return self.scan_hex_escape(8),
            '0'..='7' => {
                let mut value = c.to_digit(8)?;
                for _ in 0..2 {
                    let digit = self.cursor.advance()?.to_digit(8)?;
                    value = value * 8 + digit;
                }
                if value > 0xFF {
                    return None;
                }
                return char::from_u32(value);
            }
            _ => return None,
        };
        Some(simple)
    }

    fn scan_hex_escape(&mut self, digits: usize) -> Option<char> {
        let mut value = 0u32;
        for _ in 0..digits {
            let digit = self.cursor.advance()?.to_digit(16)?;
            value = value.checked_mul(16)? + digit;
        }
        char::from_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::Scanner;

    #[test]
    fn test_scan_bare_string() {
        let mut scanner = Scanner::new("  alpha-1;beta, gamma");
        assert_eq!(scanner.scan_string().unwrap(), "alpha-1");
        assert_eq!(scanner.scan_next().unwrap(), ";");
        assert_eq!(scanner.scan_string().unwrap(), "beta");
        assert_eq!(scanner.scan_string().unwrap(), "");
        assert_eq!(scanner.scan_next().unwrap(), ",");
        assert_eq!(scanner.scan_string().unwrap(), "gamma");
    }

    #[test]
    fn test_scan_quoted_string_escapes() {
        let mut scanner = Scanner::new(r#""tab\there \"q\" \x41\101é\U0001F600""#);
        assert_eq!(scanner.scan_quoted_string().unwrap(), "tab\there \"q\" AAé😀");
    }

    #[test]
    fn test_quoted_string_expected() {
        let mut scanner = Scanner::new("bare");
        let err = scanner.scan_quoted_string().unwrap_err();
        assert_eq!(err.to_string(), ".:1 Scanned 'bare'. Quoted string expected");
    }

    #[test]
    fn test_unterminated_quoted_string() {
        let mut scanner = Scanner::new("\"open\nnext");
        let err = scanner.scan_quoted_string().unwrap_err();
        assert_eq!(err.message(), Some("Unterminated quoted string"));
    }

    #[test]
    fn test_invalid_escape() {
        let mut scanner = Scanner::new(r#""bad \q""#);
        let err = scanner.scan_quoted_string().unwrap_err();
        assert_eq!(err.message(), Some("Invalid escape in quoted string"));
    }
}
