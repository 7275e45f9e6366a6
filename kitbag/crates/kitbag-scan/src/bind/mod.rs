//! Binding configuration text into typed records.
//!
//! The input is a sequence of `identifier value` pairs. Each identifier names
//! a record field after mapping with [`camel_case_from_identifier`], and the
//! field's [`FieldSlot`] decides how the value is scanned:
//!
//! | Slot | Value |
//! |------|-------|
//! | `Bool` | `true yes t y 1` / `false no f n 0` |
//! | `Int` | decimal integer, range-checked for the field width |
//! | `Enum` | bare word, stored as its index in the annotation list |
//! | `F32`, `F64` | digits, `-` and `.` |
//! | `Str` | quoted string, punctuation, integer text or bare string |
//! | `Record` | `{` bindings `}` |
//!
//! Records describe their fields with the [`scan_record!`](crate::scan_record)
//! macro or a hand-written [`ScanRecord`] impl.

mod name;
mod record;
mod slot;

pub use name::camel_case_from_identifier;
pub use record::{enum_index, BindOutcome};
pub use slot::{FieldSlot, IntSlot, NestedRecord, ScanRecord};

/// Implements [`ScanRecord`] for a struct from a list of its fields.
///
/// A bare field name binds by the field's type. `=> enumerated("A,B")`
/// binds an integer field from the annotation list, `=> nested` binds a
/// field whose type is itself a record, and `=> unsupported("Kind")`
/// reports the field as unbindable.
///
/// ```
/// use kitbag_scan::{scan_record, Scanner};
///
/// #[derive(Debug, Default)]
/// struct Retry {
///     attempts: i32,
/// }
/// scan_record!(Retry { attempts });
///
/// #[derive(Debug, Default)]
/// struct Service {
///     name: String,
///     mode: i32,
///     retry: Retry,
/// }
/// scan_record!(Service {
///     name,
///     mode => enumerated("Off,Passive,Active"),
///     retry => nested,
/// });
///
/// let mut service = Service::default();
/// Scanner::new("name api mode Active retry { attempts 3 }")
///     .scan_record(&mut service)
///     .unwrap();
/// assert_eq!(service.mode, 2);
/// assert_eq!(service.retry.attempts, 3);
/// ```
#[macro_export]
macro_rules! scan_record {
    (@slot $place:expr) => {
        $crate::bind::FieldSlot::from(&mut $place)
    };
    (@slot $place:expr => nested) => {
        $crate::bind::FieldSlot::record(&mut $place)
    };
    (@slot $place:expr => enumerated($values:expr)) => {
        $crate::bind::FieldSlot::enumerated(&mut $place, $values)
    };
    (@slot $place:expr => unsupported($kind:expr)) => {
        $crate::bind::FieldSlot::Unsupported($kind)
    };
    ($ty:ty { $($field:ident $(=> $how:ident $(($($arg:expr),*))?)?),* $(,)? }) => {
        impl $crate::bind::ScanRecord for $ty {
            fn field_slot(&mut self, name: &str) -> ::core::option::Option<$crate::bind::FieldSlot<'_>> {
                $(
                    if name == $crate::bind::camel_case_from_identifier(stringify!($field)) {
                        return ::core::option::Option::Some(
                            $crate::scan_record!(@slot self.$field $(=> $how $(($($arg),*))?)?)
                        );
                    }
                )*
                ::core::option::Option::None
            }
        }
    };
}
