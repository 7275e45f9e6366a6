//! Character classes for the scanner.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if a character is skipped as white space.
///
/// Any Unicode white space counts, and so does `#`, which starts a comment.
///
/// ```
/// use kitbag_scan::unicode::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\u{85}'));
/// assert!(is_space('#'));
/// assert!(!is_space('a'));
/// ```
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '#'
}

/// Checks if a character is valid as the start of an identifier.
///
/// ```
/// use kitbag_scan::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('-'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// Letters, digits, `-` and `_` are allowed.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '-' || c.is_alphanumeric()
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is punctuation: any of the Unicode `P` general
/// categories. Symbols such as `+`, `$` and `<` are not punctuation.
///
/// ```
/// use kitbag_scan::unicode::is_punct;
///
/// assert!(is_punct('{'));
/// assert!(is_punct(';'));
/// assert!(is_punct('\u{2014}'));
/// assert!(is_punct('\u{60C}'));
/// assert!(!is_punct('+'));
/// assert!(!is_punct('a'));
/// ```
pub fn is_punct(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Checks if a character is graphic: a letter, mark, number, punctuation,
/// symbol or space separator.
pub fn is_graphic(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Checks if a character may appear in a bare (unquoted) string.
///
/// Space characters, `#` included, end a bare string, as do `;` and `,`.
///
/// ```
/// use kitbag_scan::unicode::is_string_rune;
///
/// assert!(is_string_rune('a'));
/// assert!(is_string_rune('{'));
/// assert!(!is_string_rune(';'));
/// assert!(!is_string_rune(','));
/// assert!(!is_string_rune(' '));
/// assert!(!is_string_rune('#'));
/// ```
pub fn is_string_rune(c: char) -> bool {
    is_graphic(c) && c != ';' && c != ',' && !is_space(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_not_punct() {
        for c in ['$', '+', '<', '=', '>', '^', '`', '|', '~'] {
            assert!(!is_punct(c), "{:?}", c);
        }
    }

    #[test]
    fn test_ascii_punct() {
        for c in "!\"#%&'()*,-./:;?@[\\]_{}".chars() {
            assert!(is_punct(c), "{:?}", c);
        }
    }

    #[test]
    fn test_non_latin_punct() {
        for c in ['\u{55D}', '\u{60C}', '\u{964}', '\u{2E2E}', '\u{FE10}', '\u{FE50}', '\u{3001}', '\u{FF01}'] {
            assert!(is_punct(c), "{:?}", c);
        }
        for c in ['\u{60B}', '\u{966}', '\u{FE69}', '\u{20AC}'] {
            assert!(!is_punct(c), "{:?}", c);
        }
    }

    #[test]
    fn test_graphic() {
        assert!(is_graphic('é'));
        assert!(is_graphic(' '));
        assert!(!is_graphic('\u{7}'));
        assert!(!is_graphic('\u{FEFF}'));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('-'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('.'));
    }
}
