//! Dataset error types

use thiserror::Error;

/// Errors that can occur when reading the synthetic dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Requested metric is not a numeric column
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::Csv(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for DatasetError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        DatasetError::Csv(err.to_string())
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
