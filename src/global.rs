//! Process-wide default logger for call sites that don't want to carry a [`Logger`] around.
//!
//! The default is created on first use: threshold `Error`, standard output, and the path
//! `logs/log_YYYYMMDD.log` recorded but not opened. [`open_default_file`] opens it.
//! [`init`] replaces the default with an explicit logger and [`reset`] drops it, which
//! tests use to start from a clean slate.

use crate::error::Error;
use crate::level::Level;
use crate::logger::Logger;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

static DEFAULT: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// `logs/log_YYYYMMDD.log` for the day of `now`.
#[must_use]
pub fn default_log_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: fmt::Display,
{
    Path::new("logs").join(format!("log_{}.log", now.format("%Y%m%d")))
}

/// What [`logger`] installs when nothing was installed explicitly.
#[must_use]
pub fn default_logger() -> Logger {
    let logger = Logger::builder().level(Level::Error).build();
    logger.set_path(default_log_path(&Local::now()));
    logger
}

/// The installed logger, creating the default on first use.
pub fn logger() -> Arc<Logger> {
    if let Some(logger) = DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Arc::clone(logger);
    }
    let mut slot = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(slot.get_or_insert_with(|| Arc::new(default_logger())))
}

/// Installs `logger`, replacing whatever was there. Holders of the previous `Arc` keep it.
pub fn init(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    *DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&logger));
    logger
}

/// Drops the installed logger; the next call recreates the default.
pub fn reset() {
    *DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = None;
}

#[must_use]
pub fn is_initialized() -> bool {
    DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Opens (or creates) the installed logger's recorded path and switches it to file mode.
///
/// # Errors
/// `InvalidPath` when no path is recorded, otherwise as [`Logger::configure`].
pub fn open_default_file() -> Result<(), Error> {
    let logger = logger();
    let path = logger
        .path()
        .ok_or_else(|| Error::InvalidPath("no path recorded".to_string()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidPath(format!("{} has no file name", path.display())))?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    logger.configure(dir, filename)
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    logger().debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    logger().warningf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}

#[track_caller]
pub fn debug(msg: impl fmt::Display) {
    logger().debug(msg);
}

#[track_caller]
pub fn info(msg: impl fmt::Display) {
    logger().info(msg);
}

#[track_caller]
pub fn warning(msg: impl fmt::Display) {
    logger().warning(msg);
}

#[track_caller]
pub fn error(msg: impl fmt::Display) {
    logger().error(msg);
}
