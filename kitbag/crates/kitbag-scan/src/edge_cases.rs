//! Edge case tests for kitbag-scan

use crate::error::ScanError;
use crate::Scanner;

fn tokens(source: &str) -> Vec<String> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        match scanner.scan_next() {
            Ok(token) => tokens.push(token),
            Err(ScanError::EndOfInput) => break,
            Err(err) => panic!("unexpected error: {}", err),
        }
    }
    tokens
}

#[test]
fn test_edge_empty_source() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \n\t# comment only").is_empty());
}

#[test]
fn test_edge_comment_without_newline() {
    assert_eq!(tokens("word # trailing"), vec!["word"]);
}

#[test]
fn test_edge_hash_inside_quotes() {
    assert_eq!(tokens("\"a # b\" c"), vec!["a # b", "c"]);
}

#[test]
fn test_edge_hash_splits_bare_string() {
    assert_eq!(tokens("abc#def\nghi"), vec!["abc", "ghi"]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let mut scanner = Scanner::new(format!("{} 1", name));
    assert_eq!(scanner.scan_identifier().unwrap(), name);
}

#[test]
fn test_edge_line_counting_with_nel() {
    let mut scanner = Scanner::new("a\u{85}b\nc\r\nd");
    for _ in 0..4 {
        scanner.scan_next().unwrap();
    }
    assert_eq!(scanner.line_number(), 4);
}

#[test]
fn test_edge_unicode_bare_string() {
    assert_eq!(tokens("naïve 東京"), vec!["naïve", "東京"]);
}

#[test]
fn test_edge_symbols_stay_in_bare_strings() {
    assert_eq!(tokens("a+b <c> $d"), vec!["a+b", "<c>", "$d"]);
}

#[test]
fn test_edge_error_line_is_reported() {
    let mut scanner = Scanner::with_filename("\n\n  flag perhaps", "dir/sub/app.conf");
    scanner.scan_identifier().unwrap();
    let err = scanner.scan_bool().unwrap_err();
    assert_eq!(err.to_string(), "app.conf:3 Scanned 'perhaps'. Expected a boolean value");
}

#[test]
fn test_edge_non_latin_punct_splits_bare_string() {
    assert_eq!(tokens("a\u{60C}b"), vec!["a", "\u{60C}", "b"]);
    assert_eq!(tokens("x\u{964}"), vec!["x", "\u{964}"]);
}

#[test]
fn test_edge_control_character_does_not_stall() {
    let mut scanner = Scanner::new("\u{1}rest");
    let err = scanner.scan_next().unwrap_err();
    assert_eq!(err.message(), Some("Unexpected character"));
    scanner.clear_error();
    assert_eq!(scanner.scan_next().unwrap(), "rest");
}
