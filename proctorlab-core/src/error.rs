//! Error types for the `ProctorLab` core library

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("settings file I/O failed for {path}: {source}")]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML.
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings table could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
