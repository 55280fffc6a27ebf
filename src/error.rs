//! Unified error type for all levlog operations.

use std::io;
use std::path::PathBuf;

/// Error type for levlog operations.
///
/// Only configuration returns these; emission never fails from the caller's point of view.
#[derive(Debug)]
pub enum Error {
    /// A directory on the way to the log file could not be created.
    DirectoryCreation { path: PathBuf, source: io::Error },
    /// The log file could not be created (or truncated).
    FileCreation { path: PathBuf, source: io::Error },
    /// An existing log file could not be opened for appending.
    FileOpen { path: PathBuf, source: io::Error },
    /// File mode was requested before any log file was created or opened.
    NoLogFile,
    /// Path has no usable filename component.
    InvalidPath(String),
    /// I/O error from the active sink.
    Io(io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreation { path, source } => {
                write!(f, "create directory {}: {source}", path.display())
            }
            Self::FileCreation { path, source } => {
                write!(f, "create file {}: {source}", path.display())
            }
            Self::FileOpen { path, source } => {
                write!(f, "open file {}: {source}", path.display())
            }
            Self::NoLogFile => write!(f, "file sink selected but no log file is open"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreation { source, .. }
            | Self::FileCreation { source, .. }
            | Self::FileOpen { source, .. }
            | Self::Io(source) => Some(source),
            Self::ConfigParse(e) => Some(e),
            Self::NoLogFile | Self::InvalidPath(_) | Self::ConfigDirNotFound => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
