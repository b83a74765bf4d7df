use crate::difficulty::Difficulty;
use log::LevelFilter;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "snakebite";

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty selected when the program starts
    pub(crate) difficulty: Difficulty,

    /// Whether to ring the terminal bell when the snake eats
    pub(crate) sound: bool,

    /// Minimum level of messages written to the log file
    pub(crate) log_level: LevelFilter,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            difficulty: Difficulty::default(),
            sound: true,
            log_level: LevelFilter::Info,
            files: FileConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(APP_DIR).join("config.toml"))
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
            Err(e) if e.kind() == ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the path at which the high score should be stored: the file
    /// given in the configuration or, if that is not set, a file in the local
    /// data directory.  Returns `None` if neither is available.
    pub(crate) fn high_score_path(&self) -> Option<PathBuf> {
        self.files
            .high_score_file
            .clone()
            .or_else(|| data_dir().map(|p| p.join("highscore.json")))
    }

    /// Return the path at which log messages should be written
    pub(crate) fn log_path(&self) -> Option<PathBuf> {
        self.files
            .log_file
            .clone()
            .or_else(|| data_dir().map(|p| p.join("snakebite.log")))
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Path at which log messages should be written
    pub(crate) log_file: Option<PathBuf>,
}

fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(APP_DIR))
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
