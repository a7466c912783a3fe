//! Error types for model construction.

use thiserror::Error;

/// A configuration value could not be turned into a usable model input.
///
/// These are fatal for the invocation: no partial model is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("option {option} is not a real number: {value:?}")]
    NotANumber { option: String, value: String },

    #[error("option {option} must be a non-negative finite number, got {value}")]
    OutOfRange { option: String, value: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
