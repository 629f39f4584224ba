//! Fee schedule errors

use thiserror::Error;

/// Errors from loading or validating a fee schedule
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid fee schedule: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
