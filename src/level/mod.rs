//! Severity levels that gate which messages reach the sink.

use std::fmt;
use std::str::FromStr;

/// Ordinals follow the classic leveled-logger convention: lower is more severe.
///
/// A message is emitted iff its level is `<=` the configured threshold, so `Error`
/// passes every threshold and `Debug` only passes a `Debug` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Failures that prevent an operation from completing. Always shown.
    Error = 0,
    /// Non-fatal anomalies that may need attention.
    Warning = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Development-time detail. As a threshold, shows everything.
    #[default]
    Debug = 3,
}

impl Level {
    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Uppercase name used inside the `[LEVEL] ` tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::ordinal`]; `None` for anything outside `0..=3`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Error),
            1 => Some(Self::Warning),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    /// True when a message of `severity` passes this threshold.
    #[must_use]
    pub const fn allows(self, severity: Self) -> bool {
        severity.ordinal() <= self.ordinal()
    }

    /// Most severe first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Error, Self::Warning, Self::Info, Self::Debug]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell an unknown name from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive, and only the four canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
