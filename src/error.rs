//! Error types for the loadcast library.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting and monitoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// A date range whose start lies after its end.
    #[error("invalid range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The model artifact is missing, unreadable or incompatible.
    #[error("failed to load model from {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    /// A date-indexed lookup found no value.
    #[error("no value for date {0}")]
    MissingDate(NaiveDate),

    /// The holiday calendar has no data for a year.
    #[error("holiday calendar cannot resolve year {0}")]
    UnresolvedHolidayYear(i32),

    /// Monitoring was requested before any forecast was produced.
    #[error("predict must be called before monitoring")]
    ForecastRequired,

    /// An input file could not be opened or read.
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Malformed input data (CSV rows, timestamps, numbers).
    #[error("parse error: {0}")]
    Parse(String),
}

impl ForecastError {
    pub(crate) fn model_load(path: impl AsRef<std::path::Path>, reason: impl ToString) -> Self {
        ForecastError::ModelLoad {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}
