//! Handler for the `/submit` endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use guestbook_core::submission::validate_submission;
use guestbook_db::models::submission::Submission;
use guestbook_db::repositories::SubmissionRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /submit
///
/// Accepts `{ "username", "phone_number" }`, trims both fields, and
/// persists one submission with `visited = false`.
///
/// The body is parsed here rather than through the `Json` extractor so an
/// unparseable or empty body maps to the service's generic 500 response
/// instead of a framework-level 4xx rejection.
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body).map_err(AppError::MalformedBody)?;
    tracing::debug!(payload = %payload, "Received submission payload");

    let submission = Submission::from(validate_submission(&payload)?);

    SubmissionRepo::insert(&state.submissions, &submission).await?;
    tracing::info!(username = %submission.username, "Submission stored");

    Ok(Json(ApiResponse::success()))
}
