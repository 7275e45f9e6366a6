//! kitbag-util - Foundation helpers shared by the kitbag crates
//!
//! - [`path`]: home and absolute path resolution, lexical cleaning
//! - [`format`]: human-readable byte counts, integers, durations, versions
//! - [`waitlock`]: a broadcast signal with timed waits
//! - [`recurrent`]: a task repeated on a background thread
//! - [`version`]: compile version and time stamps

pub mod error;
pub mod format;
pub mod path;
pub mod recurrent;
pub mod version;
pub mod waitlock;

pub use error::{UtilError, UtilResult};
pub use path::{absolute_path, base_name, home_path};
pub use recurrent::RecurrentTask;
pub use waitlock::WaitLock;
