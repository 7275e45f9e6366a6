//! Bridge from the `log` crate macros to the global logger.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Level;

struct GlobalFacade;

static FACADE: GlobalFacade = GlobalFacade;

impl log::Log for GlobalFacade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Level::from(metadata.level()) >= crate::global().level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let file = record.file().unwrap_or_else(|| record.target());
        crate::global().log_at(Level::from(record.level()), file, record.line().unwrap_or(0), *record.args());
    }

    fn flush(&self) {
        crate::global().flush();
    }
}

/// Routes `log::info!` and friends to the global logger.
///
/// Fails if another `log` implementation is already installed.
pub fn install_log_facade() -> Result<(), SetLoggerError> {
    log::set_logger(&FACADE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
