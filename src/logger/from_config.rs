//! Logger construction from a levlog config file.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::error::Error;
use crate::internal;
use chrono::Local;

impl Logger {
    /// Loads the config from its default location and builds a logger from it.
    ///
    /// # Errors
    /// Config loading errors, and file setup errors when `[file] enabled = true`.
    pub fn from_default_config() -> Result<Self, Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// Threshold, prefix and header come from the config. With `[file] enabled = true`
    /// the file is opened (or created) and the logger starts in file mode.
    ///
    /// # Errors
    /// Any error from [`Logger::configure`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        if let Some(level) = config.diagnostics_level() {
            internal::init(level);
        }

        let logger = LoggerBuilder::new()
            .level(config.parse_level())
            .header(config.header())
            .prefix(&config.general.prefix)
            .build();
        internal::debug(
            "LOGGER",
            &format!("Threshold {} from config", logger.level()),
        );

        if config.file.enabled {
            let dir = config.file_directory();
            let filename = config.file_name(&Local::now());
            if let Err(e) = logger.configure(&dir, &filename) {
                internal::error(
                    "LOGGER",
                    &format!("Configured log file unavailable: {e}"),
                );
                return Err(e);
            }
        }

        Ok(logger)
    }
}
