// src/application/error_handling.rs
//
// Error Handling for the boundary layer
//
// ARCHITECTURE:
// - Maps internal errors → caller-facing responses
// - Provides a consistent error format with a status code
// - Never exposes internal implementation details
// - This is the one place errors get logged

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard error response for the outer layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Business-rule violation (400)
    Validation,

    /// Anything the caller cannot fix (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorType::NotFound => 404,
            ErrorType::Validation => 400,
            ErrorType::Internal => 500,
        }
    }
}

impl From<ErrorKind> for ErrorType {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => ErrorType::NotFound,
            ErrorKind::Validation => ErrorType::Validation,
            ErrorKind::Internal => ErrorType::Internal,
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(err: AppError) -> Self {
        let error_type = ErrorType::from(err.kind());

        match error_type {
            ErrorType::NotFound => {
                warn!("NOT_FOUND: {}", err);
                Self::new(
                    error_type,
                    err.to_string(),
                    Some("Requested object not found".to_string()),
                )
            }
            ErrorType::Validation => {
                warn!("VALIDATION_ERROR: {}", err);
                Self::new(error_type, err.to_string(), Some("Invalid parameters".to_string()))
            }
            ErrorType::Internal => {
                // Log full error for debugging
                error!("INTERNAL_ERROR: {:?}", err);
                Self::new(
                    error_type,
                    "Internal error".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }
        }
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            error_type,
            message,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.error_type.status_code()
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}
