//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic stays independent of
//! the serde schema.

mod structs;

pub use structs::{FileConfig, GeneralConfig, HeaderConfig};

use crate::error::Error;
use crate::fmt::Header;
use crate::internal;
use crate::level::Level;
use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "levlog.toml";

/// An empty file yields a working stdout logger: `#[serde(default)]` on every section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub header: HeaderConfig,
    pub file: FileConfig,
}

impl Config {
    /// Reads `levlog.toml` from the platform config directory. A missing file means defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or the
    /// TOML is malformed.
    pub fn load() -> Result<Self, Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// `ConfigParse` on malformed TOML or wrongly typed values.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/levlog/levlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "levlog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Unknown names fall back to `Debug`, the same default `Logger::new` uses.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Debug)
    }

    /// `None` when diagnostics are off or the level name is unknown.
    #[must_use]
    pub fn diagnostics_level(&self) -> Option<Level> {
        self.general.diagnostics.as_deref()?.parse().ok()
    }

    #[must_use]
    pub const fn header(&self) -> Header {
        let h = &self.header;
        Header {
            date: h.date,
            time: h.time,
            microseconds: h.microseconds,
            long_file: h.long_file,
            short_file: h.short_file,
            utc: h.utc,
            msg_prefix: h.msg_prefix,
        }
    }

    /// File directory with `~` expanded.
    #[must_use]
    pub fn file_directory(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.directory).as_ref())
    }

    /// File name for the given day.
    #[must_use]
    pub fn file_name<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.file
            .filename
            .replace("{date}", &now.format("%Y%m%d").to_string())
    }
}
