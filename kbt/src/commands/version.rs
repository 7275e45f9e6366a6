//! Version command: report the package version and compile stamp.

use std::io::Write;

use kitbag_util::version::{compile_time, compile_time_string, compile_version};

use crate::error::Result;

pub fn run_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "kbt {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "compile version: {}", compile_version())?;
    match compile_time() {
        Some(time) => writeln!(out, "compile time: {}", time.to_rfc3339())?,
        None => writeln!(out, "compile time: {}", compile_time_string())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_version() {
        let mut out = Vec::new();
        run_version(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("kbt {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("compile version: "));
        assert_eq!(text.lines().count(), 3);
    }
}
