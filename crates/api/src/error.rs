use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use guestbook_core::error::CoreError;

use crate::response::ApiResponse;

/// Generic message returned for any submit-side failure that is not the
/// caller's fault. The underlying error is logged, never exposed.
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process request.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds datastore and
/// body-parsing variants. Implements [`IntoResponse`] to produce the
/// service's `{ "status": "error", "message": ... }` JSON envelope; no
/// error propagates to the caller as a raw stack trace, and none is fatal
/// to the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `guestbook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A datastore error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The request body was not valid JSON.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(reason)) => {
                tracing::warn!(reason = %reason, "Rejected submission payload");
                (StatusCode::BAD_REQUEST, reason.clone())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Datastore operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROCESSING_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::MalformedBody(err) => {
                tracing::error!(error = %err, "Failed to parse request body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROCESSING_FAILED_MESSAGE.to_string(),
                )
            }
        };

        (status, axum::Json(ApiResponse::error(message))).into_response()
    }
}
