use chrono::NaiveDate;
use thiserror::Error;

/// Library-wide error type for lectio operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Date string did not parse as an ISO calendar date.
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Requested mass type is not a known provider variant.
    #[error("Unknown mass type '{0}'. Expected one of: default, day, dawn, vigil, night")]
    UnknownMassType(String),

    /// Provider has no readings for the date.
    #[error("Mass readings not found for {date}")]
    ReadingsNotFound { date: NaiveDate },

    /// Provider request failed.
    #[error("Provider error: {message}")]
    Provider { message: String, status: Option<u16> },

    /// Response payload could not be encoded.
    #[error("Failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure categories the hosting layer maps to user-facing responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied bad input.
    Client,
    /// Requested readings do not exist.
    NotFound,
    /// Upstream or encoding failure.
    Internal,
}

impl AppError {
    /// Categorize this error for user-facing status mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidDate(_) | AppError::UnknownMassType(_) => ErrorCategory::Client,
            AppError::ReadingsNotFound { .. } => ErrorCategory::NotFound,
            AppError::Provider { .. } | AppError::Json(_) => ErrorCategory::Internal,
        }
    }
}
