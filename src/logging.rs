//! Diagnostic logging.  The terminal belongs to the game while it's running,
//! so log messages go to a file instead.
use crate::config::LoggingConfig;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use thiserror::Error;

/// Where & how much to log
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LogSettings {
    pub(crate) file: PathBuf,
    pub(crate) level: LevelFilter,
}

impl LogSettings {
    /// Combine command-line options with the configuration file's logging
    /// settings, the former taking precedence.  Returns `None` if no log file
    /// was specified anywhere or if logging was turned off.
    pub(crate) fn resolve(
        file: Option<PathBuf>,
        level: Option<LevelFilter>,
        config: &LoggingConfig,
    ) -> Option<LogSettings> {
        let file = file.or_else(|| config.file.clone())?;
        let level = level.unwrap_or(config.level);
        (level != LevelFilter::Off).then_some(LogSettings { file, level })
    }

    /// Open the log file (truncating it) and install it as the global logger
    pub(crate) fn install(&self) -> Result<(), LoggingError> {
        let file = fs_err::File::create(&self.file).map_err(LoggingError::Open)?;
        let config = ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .set_time_format_rfc3339()
            .build();
        WriteLogger::init(self.level, config, file)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
