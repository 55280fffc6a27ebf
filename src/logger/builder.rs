//! Stepwise construction for loggers that need more than the defaults of `Logger::new`.

use super::Logger;
use crate::fmt::Header;
use crate::level::Level;
use crate::output::{SinkWriter, WriterOutput};
use std::io::Write;

/// Collects threshold, header and sink choices before the logger exists.
pub struct LoggerBuilder {
    level: Level,
    header: Header,
    prefix: String,
    writer: Option<WriterOutput>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Debug threshold and the date/time/source header: show everything, say where from.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            header: Header::default(),
            prefix: String::new(),
            writer: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Tests usually want `Header::NONE` so lines are stable.
    #[must_use]
    pub const fn header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Start on a custom writer instead of standard output.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(WriterOutput::new(Box::new(writer)));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut sink = SinkWriter::new(self.header, self.prefix);
        if let Some(writer) = self.writer {
            sink.set_writer(writer);
        }
        Logger::from_parts(self.level, sink)
    }
}
