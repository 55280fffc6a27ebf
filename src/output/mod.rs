//! Where rendered lines go. A logger has exactly one active sink at a time: standard
//! output, its log file, or a caller-supplied writer.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::TerminalOutput;

use crate::error::Error;
use crate::fmt::{self, Header};
use crate::level::Level;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::panic::Location;

/// One accepted message, ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// Already newline-terminated.
    pub message: &'a str,
    pub location: &'a Location<'a>,
    pub time: DateTime<Local>,
}

impl Record<'_> {
    /// `{header}[LEVEL] {message}`, where the header carries prefix, timestamp and source.
    #[must_use]
    pub fn render(&self, header: &Header, prefix: &str) -> String {
        let mut line = String::with_capacity(prefix.len() + self.message.len() + 48);
        header.write(&mut line, prefix, &self.time, self.location);
        line.push_str(&fmt::tag(self.level));
        line.push_str(self.message);
        line
    }
}

/// A destination for complete lines. Each call receives one whole line so a backend
/// can issue it as a single write.
pub trait Output: Send {
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&mut self) -> io::Result<()>;
}

/// Which output currently receives lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sink {
    #[default]
    Stdout,
    File,
    /// A writer handed over with `Logger::set_writer`.
    Writer,
}

/// Adapts any `Write` so it can act as a sink.
pub struct WriterOutput(Box<dyn Write + Send>);

impl WriterOutput {
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self(writer)
    }
}

impl Output for WriterOutput {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.0.write_all(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Formatter plus the outputs it can point at. Lives behind the logger's mutex so that
/// rendering and writing a line, and switching sinks, never interleave.
pub(crate) struct SinkWriter {
    pub(crate) header: Header,
    pub(crate) prefix: String,
    sink: Sink,
    stdout: TerminalOutput,
    file: Option<FileOutput>,
    writer: Option<WriterOutput>,
}

impl SinkWriter {
    pub(crate) fn new(header: Header, prefix: String) -> Self {
        Self {
            header,
            prefix,
            sink: Sink::Stdout,
            stdout: TerminalOutput::new(),
            file: None,
            writer: None,
        }
    }

    pub(crate) const fn sink(&self) -> Sink {
        self.sink
    }

    pub(crate) const fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Keeps the current sink; a later `select(Sink::File)` picks the new file up.
    pub(crate) fn set_file(&mut self, file: FileOutput) {
        self.file = Some(file);
    }

    pub(crate) fn set_writer(&mut self, writer: WriterOutput) {
        self.writer = Some(writer);
        self.sink = Sink::Writer;
    }

    /// Fails without changing anything when the requested output does not exist.
    pub(crate) fn select(&mut self, sink: Sink) -> Result<(), Error> {
        match sink {
            Sink::File if self.file.is_none() => return Err(Error::NoLogFile),
            Sink::Writer if self.writer.is_none() => {
                return Err(Error::Io(io::Error::other("no writer installed")));
            }
            _ => {}
        }
        self.sink = sink;
        Ok(())
    }

    fn active(&mut self) -> Result<&mut dyn Output, Error> {
        match self.sink {
            Sink::Stdout => Ok(&mut self.stdout),
            Sink::File => self
                .file
                .as_mut()
                .map(|f| f as &mut dyn Output)
                .ok_or(Error::NoLogFile),
            Sink::Writer => self
                .writer
                .as_mut()
                .map(|w| w as &mut dyn Output)
                .ok_or_else(|| Error::Io(io::Error::other("no writer installed"))),
        }
    }

    /// Renders and writes one line to the active sink.
    pub(crate) fn emit(
        &mut self,
        level: Level,
        message: &str,
        location: &Location<'_>,
    ) -> Result<(), Error> {
        let record = Record {
            level,
            message,
            location,
            time: Local::now(),
        };
        let line = record.render(&self.header, &self.prefix);
        self.active()?.write_line(line.as_bytes())?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        self.active()?.flush()?;
        Ok(())
    }
}
