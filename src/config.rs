use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file.  Gameplay itself is
/// not configurable; this only covers the program's surroundings.
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the diagnostic log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("rocksnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Read configuration from `path` if given, or else from the default path
    /// if it exists
    pub(crate) fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::load(p, false),
            None => match Config::default_path() {
                Ok(p) => Config::load(&p, true),
                Err(ConfigError::NoPath) => Ok(Config::default()),
                Err(e) => Err(e),
            },
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LoggingConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Maximum level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file should be creatable");
        file.write_all(content.as_bytes())
            .expect("temp file should be writable");
        file
    }

    #[test]
    fn empty_config() {
        let file = write_config("");
        assert_eq!(Config::load(file.path(), false).unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let file = write_config("[logging]\nfile = \"/tmp/rocksnake.log\"\nlevel = \"debug\"\n");
        assert_eq!(
            Config::load(file.path(), false).unwrap(),
            Config {
                logging: LoggingConfig {
                    file: Some(PathBuf::from("/tmp/rocksnake.log")),
                    level: LevelFilter::Debug,
                }
            }
        );
    }

    #[test]
    fn partial_logging_config() {
        let file = write_config("[logging]\nlevel = \"TRACE\"\n");
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config.logging.file, None);
        assert_eq!(config.logging.level, LevelFilter::Trace);
    }

    #[test]
    fn bad_level() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            Config::load(file.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
        assert!(matches!(
            Config::load_or_default(Some(&path)),
            Err(ConfigError::Read(_))
        ));
    }
}
