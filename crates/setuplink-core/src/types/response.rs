//! The response envelope returned by service operations.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Error half of the envelope: a stable status code and a short message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// HTTP-style status code.
    pub code: u16,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.message.clone(),
            code: err.status_code(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// `{ data, error }` envelope. Exactly one side is normally populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload on success.
    pub data: Option<T>,
    /// Error on failure.
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Failed response with no payload.
    pub fn fail(err: impl Into<ApiError>) -> Self {
        Self {
            data: None,
            error: Some(err.into()),
        }
    }

    /// Failed response that still carries a payload (e.g. `false` for a
    /// rejected delete).
    pub fn fail_with(data: T, err: impl Into<ApiError>) -> Self {
        Self {
            data: Some(data),
            error: Some(err.into()),
        }
    }

    /// Whether the envelope carries an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}
