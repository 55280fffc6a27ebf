#![forbid(unsafe_code)]

//! `levlog` - leveled logging to standard output or a log file.
//!
//! A [`Logger`] holds a severity threshold and one active sink. Messages at or above
//! the threshold's severity are written as `[LEVEL] message` lines, optionally preceded
//! by a date/time/source header. Severities, most severe first: error, warning, info,
//! debug.
//!
//! # Example
//!
//! ```
//! use levlog::{Header, Logger};
//!
//! let logger = Logger::builder().header(Header::NONE).build();
//! logger.set_level("warning");
//!
//! logger.debug("dropped");
//! logger.warning("disk almost full");
//! levlog::errorf!(logger, "code={}", 5);
//! ```
//!
//! Writing to a file instead:
//!
//! ```no_run
//! let logger = levlog::Logger::new();
//! logger.configure("logs", "app.log")?;
//! logger.info("started");
//! # Ok::<(), levlog::Error>(())
//! ```
//!
//! [`global`] offers the same emitters as free functions on a process-wide default.

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use fmt::{Header, Joined};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, Output, Sink, TerminalOutput};
