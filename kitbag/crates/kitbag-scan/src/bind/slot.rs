//! Typed descriptors for the fields a record exposes to the binder.

use crate::error::ScanResult;
use crate::Scanner;

/// A mutable reference to an integer field of some width.
#[derive(Debug)]
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

impl IntSlot<'_> {
    /// Stores `value`, or returns false if it does not fit the field.
    pub fn set(&mut self, value: i64) -> bool {
        fn store<T: TryFrom<i64>>(target: &mut T, value: i64) -> bool {
            match T::try_from(value) {
                Ok(v) => {
                    *target = v;
                    true
                }
                Err(_) => false,
            }
        }

        match self {
            Self::I8(target) => store(*target, value),
            Self::I16(target) => store(*target, value),
            Self::I32(target) => store(*target, value),
            Self::I64(target) => store(*target, value),
            Self::Isize(target) => store(*target, value),
        }
    }

    /// Returns the name of the field's integer type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
        }
    }
}

/// A field a record hands to the binder, tagged with how to fill it.
pub enum FieldSlot<'a> {
    /// Filled from a boolean token.
    Bool(&'a mut bool),
    /// Filled from a decimal integer.
    Int(IntSlot<'a>),
    /// Filled with the index of a bare word in a comma-separated list.
    Enum(IntSlot<'a>, &'static str),
    F32(&'a mut f32),
    F64(&'a mut f64),
    /// Filled from the next token, quoted or bare.
    Str(&'a mut String),
    /// Filled from a `{ ... }` block.
    Record(&'a mut dyn NestedRecord),
    /// A field of a kind the binder does not fill, named for the error.
    Unsupported(&'static str),
}

impl<'a> FieldSlot<'a> {
    /// An integer field restricted to the values of `annotation`.
    ///
    /// `annotation` is a comma-separated list; each value maps to its
    /// zero-based position.
    pub fn enumerated(slot: impl Into<IntSlot<'a>>, annotation: &'static str) -> Self {
        Self::Enum(slot.into(), annotation)
    }

    /// A nested record field.
    pub fn record<T: ScanRecord + Default>(target: &'a mut T) -> Self {
        Self::Record(target)
    }

    /// Returns the name of the slot's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(slot) => slot.kind(),
            Self::Enum(..) => "enum",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "String",
            Self::Record(_) => "record",
            Self::Unsupported(kind) => *kind,
        }
    }
}

macro_rules! int_slot_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for IntSlot<'a> {
                fn from(target: &'a mut $ty) -> Self {
                    IntSlot::$variant(target)
                }
            }

            impl<'a> From<&'a mut $ty> for FieldSlot<'a> {
                fn from(target: &'a mut $ty) -> Self {
                    FieldSlot::Int(IntSlot::$variant(target))
                }
            }
        )*
    };
}

int_slot_from!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);

impl<'a> From<&'a mut bool> for FieldSlot<'a> {
    fn from(target: &'a mut bool) -> Self {
        FieldSlot::Bool(target)
    }
}

impl<'a> From<&'a mut f32> for FieldSlot<'a> {
    fn from(target: &'a mut f32) -> Self {
        FieldSlot::F32(target)
    }
}

impl<'a> From<&'a mut f64> for FieldSlot<'a> {
    fn from(target: &'a mut f64) -> Self {
        FieldSlot::F64(target)
    }
}

impl<'a> From<&'a mut String> for FieldSlot<'a> {
    fn from(target: &'a mut String) -> Self {
        FieldSlot::Str(target)
    }
}

/// A record the binder can fill by field name.
///
/// Names are the camel-cased form of the configuration identifiers, as
/// produced by [`camel_case_from_identifier`](super::camel_case_from_identifier).
/// The [`scan_record!`](crate::scan_record) macro writes this impl from a
/// field list.
pub trait ScanRecord {
    /// Returns the slot for the field called `name`, or `None` if there is
    /// no such field.
    fn field_slot(&mut self, name: &str) -> Option<FieldSlot<'_>>;
}

/// A record that can be bound from a `{ ... }` block.
///
/// Implemented for every [`ScanRecord`] with a [`Default`]: the block is
/// bound into a fresh default value, which replaces the field only once the
/// closing `}` has been read.
pub trait NestedRecord {
    fn bind_nested(&mut self, scanner: &mut Scanner) -> ScanResult<usize>;
}

impl<T: ScanRecord + Default> NestedRecord for T {
    fn bind_nested(&mut self, scanner: &mut Scanner) -> ScanResult<usize> {
        let mut fresh = T::default();
        let outcome = scanner.bind_fields(&mut fresh, true)?;
        *self = fresh;
        Ok(outcome.fields_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_slot_range_checks() {
        let mut small = 0i8;
        let mut slot = IntSlot::from(&mut small);
        assert!(slot.set(-128));
        assert!(!slot.set(200));
        assert_eq!(slot.kind(), "i8");
        assert_eq!(small, -128);
    }

    #[test]
    fn test_slot_kinds() {
        let mut flag = false;
        let mut text = String::new();
        let mut level = 0i32;
        assert_eq!(FieldSlot::from(&mut flag).kind(), "bool");
        assert_eq!(FieldSlot::from(&mut text).kind(), "String");
        assert_eq!(FieldSlot::enumerated(&mut level, "A,B").kind(), "enum");
        assert_eq!(FieldSlot::Unsupported("Vec<u8>").kind(), "Vec<u8>");
    }
}
