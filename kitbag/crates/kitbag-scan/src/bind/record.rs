//! Binding `identifier value` pairs into a record.

use crate::bind::name::camel_case_from_identifier;
use crate::bind::slot::{FieldSlot, ScanRecord};
use crate::error::{ScanError, ScanResult};
use crate::Scanner;

/// How a run of bindings ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindOutcome {
    /// Number of fields assigned.
    pub fields_bound: usize,
    /// True if the run ended at a closing `}`.
    pub closed: bool,
}

impl Scanner {
    /// Binds every `identifier value` pair in the remaining input into
    /// `record`.
    ///
    /// Each identifier is mapped with
    /// [`camel_case_from_identifier`] and looked up through
    /// [`ScanRecord::field_slot`]; the slot's kind decides how its value is
    /// scanned. Fields set before an error keep their new values.
    ///
    /// # Example
    ///
    /// ```
    /// use kitbag_scan::{scan_record, Scanner};
    ///
    /// #[derive(Debug, Default)]
    /// struct Limits {
    ///     max_open: i32,
    ///     strict: bool,
    /// }
    /// scan_record!(Limits { max_open, strict });
    ///
    /// let mut limits = Limits::default();
    /// let mut scanner = Scanner::new("max-open 64\nstrict yes\n");
    /// scanner.scan_record(&mut limits).unwrap();
    /// assert_eq!(limits.max_open, 64);
    /// assert!(limits.strict);
    /// ```
    pub fn scan_record(&mut self, record: &mut dyn ScanRecord) -> ScanResult<BindOutcome> {
        self.bind_fields(record, false)
    }

    pub(crate) fn bind_fields(&mut self, record: &mut dyn ScanRecord, nested: bool) -> ScanResult<BindOutcome> {
        let mut outcome = BindOutcome::default();
        loop {
            self.check()?;
            self.skip_spaces();

            if self.cursor.is_at_end() {
                if nested {
                    self.token.clear();
                    return Err(self.set_error_message("expected '}'"));
                }
                return Ok(outcome);
            }
            if nested && self.cursor.match_char('}') {
                self.token = "}".to_string();
                outcome.closed = true;
                return Ok(outcome);
            }

            let identifier = self.scan_identifier()?;
            let field_name = camel_case_from_identifier(&identifier);
            let Some(slot) = record.field_slot(&field_name) else {
                return Err(self.set_error_message("Configuration identifier expected"));
            };
            self.bind_slot(&identifier, slot)?;
            outcome.fields_bound += 1;
            log::trace!("Bound '{}' to {}.", identifier, field_name);
        }
    }

    fn bind_slot(&mut self, identifier: &str, slot: FieldSlot<'_>) -> ScanResult<()> {
        match slot {
            FieldSlot::Bool(target) => *target = self.scan_bool()?,
            FieldSlot::Int(mut target) => {
                let value = self.scan_integer()?;
                if !target.set(value) {
                    return Err(self.set_error_message(format!(
                        "Integer out of range for {}",
                        target.kind()
                    )));
                }
            }
            FieldSlot::Enum(mut target, annotation) => {
                let word = self.scan_string()?;
                let index = enum_index(annotation, &word)
                    .ok_or_else(|| self.set_error_message(format!("Invalid enum '{}'", word)))?;
                if !target.set(index as i64) {
                    return Err(self.set_error_message(format!(
                        "Enum '{}' out of range for {}",
                        word,
                        target.kind()
                    )));
                }
            }
            FieldSlot::F32(target) => *target = self.scan_float()? as f32,
            FieldSlot::F64(target) => *target = self.scan_float()?,
            FieldSlot::Str(target) => *target = self.scan_next()?,
            FieldSlot::Record(target) => {
                let open = self.scan_next()?;
                if open != "{" {
                    return Err(self.set_error_message("expected '{'"));
                }
                target.bind_nested(self)?;
            }
            FieldSlot::Unsupported(kind) => {
                return Err(self.fail(ScanError::UnhandledType {
                    identifier: identifier.to_string(),
                    kind: kind.to_string(),
                }));
            }
        }
        Ok(())
    }
}

/// Returns the position of `word` in the comma-separated `annotation`.
///
/// Values are trimmed and empty values are skipped.
pub fn enum_index(annotation: &str, word: &str) -> Option<usize> {
    annotation
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .position(|value| value == word)
}
