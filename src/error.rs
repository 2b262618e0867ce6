//! Application error type shared by every layer.
//!
//! Each variant carries its kind as a tag; the HTTP status and response body
//! are derived from the tag, never parsed back out of a message string.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// JSON body returned by API routes on failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or a supplied value is malformed.
    #[error("{0}")]
    Validation(String),

    /// The token is unknown (or, for redirects, the link is inactive).
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// The store is unreachable or rejected a write. Any open transaction has
    /// been rolled back by the time this surfaces.
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Anything not covered above.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Persistence(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to callers.
    ///
    /// Driver errors are replaced with a generic message; the full error is
    /// logged by [`IntoResponse`].
    pub fn public_message(&self) -> String {
        match self {
            AppError::Persistence(_) => "Database error".to_string(),
            other => other.to_string(),
        }
    }

    /// Converts into the `{success: false, error}` body used by API routes.
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            success: false,
            error: self.public_message(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field} {message}"),
                    None => format!("{field} is invalid ({})", e.code),
                })
            })
            .collect();

        messages.sort();

        if messages.is_empty() {
            return AppError::bad_request("Invalid request");
        }

        AppError::bad_request(messages.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}
