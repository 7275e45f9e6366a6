//! Tokens command: print the token stream of a file.

use std::io::Write;
use std::path::PathBuf;

use kitbag_scan::Scanner;

use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to scan.
    pub file: PathBuf,
}

/// Writes one `<line> <token>` pair per token until the end of input.
pub fn run_tokens(args: TokensArgs, out: &mut dyn Write) -> Result<()> {
    let mut scanner = Scanner::open(&args.file)?;
    write_tokens(&mut scanner, out)
}

pub fn write_tokens(scanner: &mut Scanner, out: &mut dyn Write) -> Result<()> {
    let mut count = 0usize;
    loop {
        match scanner.scan_next() {
            Ok(token) => {
                count += 1;
                writeln!(out, "{:>4} {}", scanner.line_number(), token)?;
            }
            Err(err) if err.is_end_of_input() => break,
            Err(err) => return Err(err.into()),
        }
    }
    log::debug!("Scanned {} tokens from '{}'.", count, scanner.filename());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tokens() {
        let mut scanner = Scanner::new("name \"two words\" # comment\nport 8080\n{ }");
        let mut out = Vec::new();
        write_tokens(&mut scanner, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "   1 name\n   1 two words\n   2 port\n   2 8080\n   3 {\n   3 }\n"
        );
    }

    #[test]
    fn test_write_tokens_reports_syntax_error() {
        let mut scanner = Scanner::with_filename("ok \"unterminated\n", "bad.conf");
        let mut out = Vec::new();
        let err = write_tokens(&mut scanner, &mut out).unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), "   1 ok\n");
        let message = err.to_string();
        assert!(message.starts_with("bad.conf:"), "{}", message);
        assert!(message.ends_with("Unterminated quoted string"), "{}", message);
    }
}
