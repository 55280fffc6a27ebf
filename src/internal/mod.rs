//! levlog's own diagnostic channel. File setup and sink switching report through it so
//! a host can see why its log file did not appear.
//!
//! Uses `OnceLock` so the channel is initialized exactly once, even if several entry
//! points race to call `init`. Until then every call is a no-op.

use crate::fmt::Header;
use crate::level::Level;
use crate::logger::Logger;
use std::io;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Turns the channel on, writing to standard error. Only the first call takes effect.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::builder()
            .level(level)
            .header(Header::STANDARD)
            .prefix("levlog: ")
            .writer(io::stderr())
            .build()
    });
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics enabled at {level}"));
    }
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, format_args!("{scope}: {msg}"));
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Configuration failures that are also returned to the caller.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
