//! Errors reported by numeric containers and the configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum MathError {
    /// A container holds a non-finite value after a mutation or at
    /// construction. Only reported when debug checks are enabled.
    #[error("{type_name}.{operation}: some fields set to invalid numbers")]
    Validation {
        type_name: &'static str,
        operation: &'static str,
    },

    #[error("Invalid number {value}")]
    InvalidNumber { value: f64 },

    #[error("Unknown configuration option `{key}`")]
    UnknownOption { key: String },

    #[error("Invalid value for configuration option `{key}`: {reason}")]
    InvalidOptionValue { key: String, reason: String },
}

/// Returns the given value if it is finite, and an
/// [`MathError::InvalidNumber`] otherwise.
pub fn check_number(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::InvalidNumber { value })
    }
}
