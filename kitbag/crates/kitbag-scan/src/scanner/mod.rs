//! Scanner module.
//!
//! The scanner implementation is split into focused parts:
//! - `core` - Scanner struct, constructors and the sticky error
//! - `spaces` - White space, comments and end-of-line scanning
//! - `number` - Integer, octal and float scanning
//! - `string` - Quoted and bare string scanning
//! - `token` - Identifiers, booleans, punctuation and `scan_next` dispatch

mod core;
mod number;
mod spaces;
mod string;
mod token;

pub use self::core::Scanner;
