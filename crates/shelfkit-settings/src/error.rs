//! Error types for the settings crate.

use shelfkit_camtools::ParameterError;
use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The project file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The project file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to project file handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The stored shelf parameters are rejected by the generator.
    #[error("Invalid shelf parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<ParameterError> for SettingsError {
    fn from(err: ParameterError) -> Self {
        SettingsError::Config(ConfigError::InvalidParameters(err))
    }
}
