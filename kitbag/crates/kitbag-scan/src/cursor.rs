//! Character cursor over an owned source text.
//!
//! The cursor tracks the byte position and the 1-based line number. Both LF
//! and NEL (U+0085) end a line.

/// Returns true for the runes that end a line.
#[inline]
pub fn is_line_feed(c: char) -> bool {
    c == '\n' || c == '\u{85}'
}

/// A cursor for traversing scanner input character by character.
///
/// # Example
///
/// ```
/// use kitbag_scan::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'b');
/// assert_eq!(cursor.line(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    position: usize,
    line: u32,
}

impl Cursor {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            line: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek().unwrap_or('\0')
    }

    /// Returns the current character, or `None` at the end of the input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead of the current one.
    pub fn peek_nth(&self, offset: usize) -> Option<char> {
        self.source[self.position..].chars().nth(offset)
    }

    /// Consumes the current character and returns it.
    ///
    /// Does nothing at the end of the input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if is_line_feed(c) {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn take_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        self.source[start..self.position].to_string()
    }

    /// Returns true if the cursor is at the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start.min(self.position)..self.position]
    }

    /// Returns the unconsumed part of the input.
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_lines() {
        let mut cursor = Cursor::new("a\nb\u{85}c");
        while cursor.advance().is_some() {}
        assert_eq!(cursor.line(), 3);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_multibyte_advance() {
        let mut cursor = Cursor::new("héllo");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), "llo");
    }

    #[test]
    fn test_take_while() {
        let mut cursor = Cursor::new("123abc");
        assert_eq!(cursor.take_while(|c| c.is_ascii_digit()), "123");
        assert_eq!(cursor.peek_nth(2), Some('c'));
        assert!(cursor.match_char('a'));
        assert!(!cursor.match_char('a'));
    }
}
