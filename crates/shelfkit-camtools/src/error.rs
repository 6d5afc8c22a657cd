//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for panel generation,
//! parameter validation, and output emission.

use std::io;
use thiserror::Error;

/// Errors that can occur during panel generation and output.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The configuration cannot produce a valid layout.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ParameterError),

    /// Generation failed after the configuration was accepted.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A traced outline did not form a closed polygon.
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// A derived length came out zero or negative.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

impl ParameterError {
    pub fn invalid_value(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
