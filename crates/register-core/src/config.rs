// crates/register-core/src/config.rs - Register configuration
//
// The CLI exposes no flags, environment variables or config file, so the
// configuration is built from the defaults below. Tests and embedders point
// `data_file` somewhere else with `RegisterConfig::with_data_file`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// File name used when no other location is configured
pub const DEFAULT_DATA_FILE: &str = "appointments.txt";

/// Errors that can occur while validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Appointment file path is empty")]
    EmptyDataFile,

    #[error("Appointment file path is a directory: {0}")]
    DataFileIsDirectory(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the register needs to know before touching the disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    /// Flat file holding the appointments, relative to the working directory
    /// unless absolute
    pub data_file: PathBuf,

    /// Most verbose level written to stderr by the CLI's log subscriber
    pub log_level: Level,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: Level::WARN,
        }
    }
}

impl RegisterConfig {
    /// Default configuration reading and writing `path`
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::default()
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Catch settings that would make every load or save fail
    ///
    /// A data file that does not exist yet is fine; it is created on the
    /// first save.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataFile);
        }

        if self.data_file.is_dir() {
            return Err(ConfigError::DataFileIsDirectory(
                self.data_file.display().to_string(),
            ));
        }

        Ok(())
    }
}
