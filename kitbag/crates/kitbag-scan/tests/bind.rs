//! Binding configuration text into records.

use kitbag_scan::bind::FieldSlot;
use kitbag_scan::{scan_record, ScanError, ScanRecord, Scanner};

const LEVELS: &str = "LevelInvalid,LevelAll,LevelDebug,LevelInfo,LevelMax";

#[derive(Debug, Default, PartialEq)]
struct SubStruct {
    s1: String,
    i1: isize,
}
scan_record!(SubStruct { s1, i1 });

#[derive(Debug, Default, PartialEq)]
struct TestStruct {
    b: bool,
    i8: i8,
    i16: i16,
    i32: i32,
    i64: i64,
    i: isize,
    f32: f32,
    f64: f64,
    s: String,
    enum_test: i32,
    sub_struct: SubStruct,
    last_string: String,
}
scan_record!(TestStruct {
    b,
    i8,
    i16,
    i32,
    i64,
    i,
    f32,
    f64,
    s,
    enum_test => enumerated(LEVELS),
    sub_struct => nested,
    last_string,
});

const TEST_STRING: &str = r#"
b   true
i8  1
i16 2
i32 3
i64 4
i   5
f32 0.6
f64 0.7
s   "This is a string."
enum_test LevelDebug
sub_struct {
    s1  "s1 string"
    i1  42
}
last-string Final
"#;

#[test]
fn test_binds_every_kind() {
    let mut record = TestStruct::default();
    let mut scanner = Scanner::new(TEST_STRING);
    let outcome = scanner.scan_record(&mut record).unwrap();

    assert_eq!(outcome.fields_bound, 12);
    assert!(!outcome.closed);
    assert_eq!(
        record,
        TestStruct {
            b: true,
            i8: 1,
            i16: 2,
            i32: 3,
            i64: 4,
            i: 5,
            f32: 0.6,
            f64: 0.7,
            s: "This is a string.".to_string(),
            enum_test: 2,
            sub_struct: SubStruct {
                s1: "s1 string".to_string(),
                i1: 42,
            },
            last_string: "Final".to_string(),
        }
    );
}

#[test]
fn test_unknown_identifier() {
    let mut record = TestStruct::default();
    let mut scanner = Scanner::with_filename("b yes\nunknown 1\n", "test.conf");
    let err = scanner.scan_record(&mut record).unwrap_err();

    assert_eq!(
        err.to_string(),
        "test.conf:2 Scanned 'unknown'. Configuration identifier expected"
    );
    assert!(record.b, "fields before the error keep their values");
}

#[test]
fn test_invalid_enum() {
    let mut record = TestStruct::default();
    let err = Scanner::new("enum-test LevelLoud").scan_record(&mut record).unwrap_err();
    assert_eq!(err.message(), Some("Invalid enum 'LevelLoud'"));
}

#[test]
fn test_integer_out_of_range_for_field() {
    let mut record = TestStruct::default();
    let err = Scanner::new("i8 300").scan_record(&mut record).unwrap_err();
    assert_eq!(err.message(), Some("Integer out of range for i8"));
}

#[test]
fn test_nested_record_requires_brace() {
    let mut record = TestStruct::default();
    let err = Scanner::new("sub_struct s1 x").scan_record(&mut record).unwrap_err();
    assert_eq!(err.message(), Some("expected '{'"));
}

#[test]
fn test_nested_record_requires_close() {
    let mut record = TestStruct::default();
    let err = Scanner::new("sub_struct { s1 partial i1 7")
        .scan_record(&mut record)
        .unwrap_err();
    assert_eq!(err.message(), Some("expected '}'"));
    assert_eq!(record.sub_struct, SubStruct::default());
}

#[test]
fn test_stray_close_brace_at_top_level() {
    let mut record = TestStruct::default();
    let err = Scanner::new("b no }").scan_record(&mut record).unwrap_err();
    assert_eq!(err.to_string(), ".:1 Scanned '}'. Expected an identifier");
}

#[test]
fn test_empty_input_binds_nothing() {
    let mut record = TestStruct::default();
    let outcome = Scanner::new("  # nothing here\n")
        .scan_record(&mut record)
        .unwrap();
    assert_eq!(outcome.fields_bound, 0);
}

struct Clock {
    zone: String,
}

impl ScanRecord for Clock {
    fn field_slot(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "Zone" => Some(FieldSlot::from(&mut self.zone)),
            "When" => Some(FieldSlot::Unsupported("DateTime")),
            _ => None,
        }
    }
}

#[test]
fn test_unsupported_field_kind() {
    let mut clock = Clock { zone: String::new() };
    let mut scanner = Scanner::new("zone UTC when now");
    let err = scanner.scan_record(&mut clock).unwrap_err();

    assert_eq!(clock.zone, "UTC");
    assert_eq!(
        err,
        ScanError::UnhandledType {
            identifier: "when".to_string(),
            kind: "DateTime".to_string(),
        }
    );
    assert_eq!(err.to_string(), "'when' unhandled type: DateTime");
    assert_eq!(scanner.last_error(), Some(&err));
}
