//! Error types for the BookApp server

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Book operation failure codes.
///
/// Codes are scoped to the Book resource; they overlap with
/// [`UserErrorCode`] values and must never be compared across resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BookErrorCode {
    NoBookFound = 1,
    ErrorSavingBook = 2,
    ErrorUpdatingBook = 3,
    ErrorDeletingBook = 4,
}

/// User operation failure codes, scoped to the User resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum UserErrorCode {
    NoUserFound = 4,
    ErrorSavingUser = 5,
    ErrorUpdatingUser = 6,
    ErrorDeletingUser = 7,
}

impl From<BookErrorCode> for u32 {
    fn from(code: BookErrorCode) -> u32 {
        code as u32
    }
}

impl From<UserErrorCode> for u32 {
    fn from(code: UserErrorCode) -> u32 {
        code as u32
    }
}

/// Main application error type.
///
/// `Validation` is raised by the controllers before any service call and
/// always maps to 400. `Operation` signals a service or repository call that
/// yielded no result (null entity, false delete) and always maps to 404,
/// carrying the resource-scoped failure code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{description}")]
    Operation { code: u32, description: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build an operation failure from a resource-scoped error code.
    pub fn operation(code: impl Into<u32>, description: impl Into<String>) -> Self {
        ApiError::Operation {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
    pub error_description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(description) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error_code: None,
                    error_description: description,
                },
            ),
            ApiError::Operation { code, description } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error_code: Some(code),
                    error_description: description,
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_code: None,
                        error_description: "Internal server error".to_string(),
                    },
                )
            }
        };

        // Same indented formatting as success responses
        let body = serde_json::to_vec_pretty(&body).unwrap_or_default();
        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

/// Result type alias for application operations
pub type ApiResult<T> = Result<T, ApiError>;
