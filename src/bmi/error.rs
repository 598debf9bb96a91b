//! BMI error types

use thiserror::Error;

/// Errors raised when building a validated measurement
///
/// `classify` itself never fails; only input collection does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    /// A measurement field is outside its accepted range or not a number
    #[error("Invalid {field}: {value} (expected {min} to {max})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Result type alias for BMI operations
pub type BmiResult<T> = Result<T, BmiError>;
