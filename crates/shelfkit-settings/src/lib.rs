//! ShelfKit Settings Crate
//!
//! Handles shelf project files: loading, saving, validation and unit
//! conversion of the stored parameters.

pub mod config;
pub mod error;

pub use config::{Config, OutputFormat, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
