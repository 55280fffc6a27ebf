//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold name (`debug`, `info`, `warning`, `error`).
    pub level: String,
    /// Text written at the start of every line.
    pub prefix: String,
    /// Level for levlog's own diagnostics on stderr; absent means off.
    pub diagnostics: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            prefix: String::new(),
            diagnostics: None,
        }
    }
}

/// Line header annotations.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub long_file: bool,
    pub short_file: bool,
    pub utc: bool,
    pub msg_prefix: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            long_file: true,
            short_file: false,
            utc: false,
            msg_prefix: false,
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Start in file mode.
    pub enabled: bool,
    /// Directory for the log file. `~` is expanded.
    pub directory: String,
    /// File name; `{date}` becomes `YYYYMMDD`.
    pub filename: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: "logs".to_string(),
            filename: "log_{date}.log".to_string(),
        }
    }
}
