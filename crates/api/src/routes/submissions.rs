use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes.
///
/// ```text
/// POST /submit    -> submissions::submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(submissions::submit))
}
