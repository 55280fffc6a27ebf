//! The leveled logger: a severity threshold, one active sink, and the eight emitters.
//!
//! Every method takes `&self`. The threshold is atomic and everything that touches the
//! sink sits behind one mutex, so a `Logger` can be shared across threads (or stored in
//! a static) without wrapping it. Configuration is still expected to finish before
//! concurrent logging starts; the mutex only guarantees that lines never interleave.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::fmt::Header;
use crate::internal;
use crate::level::Level;
use crate::output::{FileOutput, Sink, SinkWriter, WriterOutput};
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct Logger {
    level: AtomicU8,
    path: Mutex<Option<PathBuf>>,
    writer: Mutex<SinkWriter>,
    failures: AtomicU64,
    last_error: Mutex<Option<String>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sink", &self.sink())
            .field("path", &self.path())
            .field("write_failures", &self.write_failures())
            .finish()
    }
}

impl Logger {
    /// Threshold `Debug`, standard output, no path, date/time/source header.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(level: Level, writer: SinkWriter) -> Self {
        Self {
            level: AtomicU8::new(level.ordinal()),
            path: Mutex::new(None),
            writer: Mutex::new(writer),
            failures: AtomicU64::new(0),
            last_error: Mutex::new(None),
        }
    }

    // A panic while holding a lock cannot leave these in a torn state, so poisoning is ignored.
    fn lock_writer(&self) -> MutexGuard<'_, SinkWriter> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_path(&self) -> MutexGuard<'_, Option<PathBuf>> {
        self.path.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------------------------------------------------
    // Threshold
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_ordinal(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Case-insensitive `debug`, `info`, `warning` or `error`.
    ///
    /// Any other name is ignored and the current threshold stays in place. This is
    /// intentional lenience: a typo in a config value must not silence or flood the log.
    pub fn set_level(&self, name: &str) {
        if let Ok(level) = name.parse::<Level>() {
            self.set_threshold(level);
        }
    }

    pub fn set_threshold(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Whether a message of `level` would currently be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    // ---------------------------------------------------------------------
    // Path and file setup
    // ---------------------------------------------------------------------

    /// The path last recorded by `set_path` or by a successful file setup.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.lock_path().clone()
    }

    /// Only records the path. Nothing is created and the sink is unchanged;
    /// use [`Logger::configure_path`] to create and switch in one step.
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        *self.lock_path() = Some(path.into());
    }

    /// Creates `dir` (and its parents) and a fresh, empty `filename` inside it.
    ///
    /// The new file replaces any previously held one, but the sink is not switched:
    /// call [`Logger::set_sink_mode`] afterwards.
    ///
    /// # Errors
    /// `DirectoryCreation` or `FileCreation`. On error the logger is unchanged.
    pub fn set_file_creation(&self, dir: impl AsRef<Path>, filename: &str) -> Result<(), Error> {
        let file = FileOutput::create(dir, filename)?;
        let path = file.path().to_path_buf();
        self.lock_writer().set_file(file);
        *self.lock_path() = Some(path);
        Ok(())
    }

    /// `true` points the formatter at the log file, `false` at standard output.
    ///
    /// # Errors
    /// `NoLogFile` when asked for file mode before any file was created or opened.
    /// The sink is left as it was.
    pub fn set_sink_mode(&self, to_file: bool) -> Result<(), Error> {
        let sink = if to_file { Sink::File } else { Sink::Stdout };
        let result = self.lock_writer().select(sink);
        match &result {
            Ok(()) => internal::debug("LOGGER", &format!("Sink switched to {sink:?}")),
            Err(e) => internal::warn("LOGGER", &format!("Sink unchanged: {e}")),
        }
        result
    }

    /// True while lines go to the log file.
    #[must_use]
    pub fn to_file(&self) -> bool {
        self.sink() == Sink::File
    }

    #[must_use]
    pub fn sink(&self) -> Sink {
        self.lock_writer().sink()
    }

    /// Whether a log file is held, active or not.
    #[must_use]
    pub fn has_file(&self) -> bool {
        self.lock_writer().has_file()
    }

    /// Directory creation, file creation-or-append, and the switch to file mode as one step.
    ///
    /// If `dir/filename` is already a regular file it is opened for appending and its
    /// content is kept. Otherwise each missing level of `dir` is created and the file is
    /// created empty.
    ///
    /// # Errors
    /// `DirectoryCreation`, `FileCreation`, `FileOpen` or `InvalidPath`. Nothing about
    /// the logger changes on error, so the caller may keep logging to standard output.
    pub fn configure(&self, dir: impl AsRef<Path>, filename: &str) -> Result<(), Error> {
        let file = FileOutput::open_or_create(dir, filename)?;
        let path = file.path().to_path_buf();
        {
            let mut writer = self.lock_writer();
            writer.set_file(file);
            writer.select(Sink::File)?;
        }
        internal::info("LOGGER", &format!("Logging to {}", path.display()));
        *self.lock_path() = Some(path);
        Ok(())
    }

    /// [`Logger::configure`] for a single `/`-separated path whose last component is the file name.
    ///
    /// # Errors
    /// `InvalidPath` if the path ends in `/` or is empty, otherwise as `configure`.
    pub fn configure_path(&self, path: &str) -> Result<(), Error> {
        let (dir, filename) = split_path(path)?;
        self.configure(dir, filename)
    }

    // ---------------------------------------------------------------------
    // Formatter
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn header(&self) -> Header {
        self.lock_writer().header
    }

    pub fn set_header(&self, header: Header) {
        self.lock_writer().header = header;
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock_writer().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock_writer().prefix = prefix.into();
    }

    /// Sends lines to `writer` from now on. The log file, if any, is kept and can be
    /// reselected with `set_sink_mode(true)`.
    pub fn set_writer(&self, writer: impl Write + Send + 'static) {
        self.lock_writer()
            .set_writer(WriterOutput::new(Box::new(writer)));
    }

    /// # Errors
    /// I/O errors from the active sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock_writer().flush()
    }

    // ---------------------------------------------------------------------
    // Failure signal
    // ---------------------------------------------------------------------

    /// Lines that were accepted but could not be written.
    #[must_use]
    pub fn write_failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Message of the most recent failed write.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record_failure(&self, err: &Error) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(err.to_string());
    }

    // ---------------------------------------------------------------------
    // Emitters
    // ---------------------------------------------------------------------

    /// Formatted emission. A newline is added unless the message already ends with one.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let mut message = fmt::format(args);
        if !message.ends_with('\n') {
            message.push('\n');
        }
        self.write(level, &message, Location::caller());
    }

    /// Unformatted emission: the value followed by exactly one newline.
    #[track_caller]
    pub fn log_line(&self, level: Level, msg: &dyn fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let message = format!("{msg}\n");
        self.write(level, &message, Location::caller());
    }

    fn write(&self, level: Level, message: &str, location: &Location<'_>) {
        let result = self.lock_writer().emit(level, message, location);
        if let Err(e) = result {
            self.record_failure(&e);
        }
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Several values can be passed space-joined with [`crate::fmt::Joined`] or the `debug!` macro.
    #[track_caller]
    pub fn debug(&self, msg: impl fmt::Display) {
        self.log_line(Level::Debug, &msg);
    }

    #[track_caller]
    pub fn info(&self, msg: impl fmt::Display) {
        self.log_line(Level::Info, &msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: impl fmt::Display) {
        self.log_line(Level::Warning, &msg);
    }

    #[track_caller]
    pub fn error(&self, msg: impl fmt::Display) {
        self.log_line(Level::Error, &msg);
    }
}

/// `"logs/2024/app.log"` → `("logs/2024", "app.log")`. A bare name lives in the current
/// directory and a leading `/` keeps the root.
fn split_path(path: &str) -> Result<(&str, &str), Error> {
    let (dir, filename) = match path.rsplit_once('/') {
        Some(("", filename)) => ("/", filename),
        Some((dir, filename)) => (dir, filename),
        None => ("", path),
    };
    if filename.is_empty() {
        return Err(Error::InvalidPath(format!("'{path}' has no file name")));
    }
    Ok((dir, filename))
}
