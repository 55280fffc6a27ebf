//! Every line may start with a date, a time, and the caller's source location.
//! Which of these appear is a per-logger choice, captured by [`Header`].

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::panic::Location;

/// Annotations written ahead of the `[LEVEL] ` tag.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// `2009/01/23 `
    pub date: bool,
    /// `01:23:23 `
    pub time: bool,
    /// Adds `.123123` to the time. Implies `time`.
    pub microseconds: bool,
    /// `src/net/conn.rs:23: ` as reported by the compiler.
    pub long_file: bool,
    /// `conn.rs:23: ` and wins over `long_file`.
    pub short_file: bool,
    /// Render timestamps in UTC rather than local time.
    pub utc: bool,
    /// Move the logger prefix from the start of the line to just before the tag.
    pub msg_prefix: bool,
}

impl Default for Header {
    /// Date, time and full source location.
    fn default() -> Self {
        Self {
            long_file: true,
            ..Self::STANDARD
        }
    }
}

impl Header {
    /// No annotations at all: lines start with the prefix and the tag.
    pub const NONE: Self = Self {
        date: false,
        time: false,
        microseconds: false,
        long_file: false,
        short_file: false,
        utc: false,
        msg_prefix: false,
    };

    /// Date and time only.
    pub const STANDARD: Self = Self {
        date: true,
        time: true,
        ..Self::NONE
    };

    #[must_use]
    pub const fn date(mut self, enabled: bool) -> Self {
        self.date = enabled;
        self
    }

    #[must_use]
    pub const fn time(mut self, enabled: bool) -> Self {
        self.time = enabled;
        self
    }

    #[must_use]
    pub const fn microseconds(mut self, enabled: bool) -> Self {
        self.microseconds = enabled;
        self
    }

    #[must_use]
    pub const fn long_file(mut self, enabled: bool) -> Self {
        self.long_file = enabled;
        self
    }

    #[must_use]
    pub const fn short_file(mut self, enabled: bool) -> Self {
        self.short_file = enabled;
        self
    }

    #[must_use]
    pub const fn utc(mut self, enabled: bool) -> Self {
        self.utc = enabled;
        self
    }

    #[must_use]
    pub const fn msg_prefix(mut self, enabled: bool) -> Self {
        self.msg_prefix = enabled;
        self
    }

    /// Appends the prefix (unless it belongs before the tag) and the enabled annotations.
    pub fn write(
        &self,
        out: &mut String,
        prefix: &str,
        now: &DateTime<Local>,
        location: &Location<'_>,
    ) {
        if !self.msg_prefix {
            out.push_str(prefix);
        }

        if self.date || self.time || self.microseconds {
            let stamp = if self.utc {
                now.naive_utc()
            } else {
                now.naive_local()
            };
            if self.date {
                let _ = write!(out, "{} ", stamp.format("%Y/%m/%d"));
            }
            if self.microseconds {
                let _ = write!(out, "{} ", stamp.format("%H:%M:%S%.6f"));
            } else if self.time {
                let _ = write!(out, "{} ", stamp.format("%H:%M:%S"));
            }
        }

        if self.short_file || self.long_file {
            let file = if self.short_file {
                short_name(location.file())
            } else {
                location.file()
            };
            let _ = write!(out, "{file}:{}: ", location.line());
        }

        if self.msg_prefix {
            out.push_str(prefix);
        }
    }
}

fn short_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
