use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};

use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /check_mongo -- round-trips a ping to the datastore.
///
/// This is the one endpoint that reports failure detail to the caller;
/// the submit path only ever returns a generic message.
async fn check_mongo(State(state): State<AppState>) -> impl IntoResponse {
    match guestbook_db::health_check(&state.client).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success_with("Connected to MongoDB successfully.")),
        ),
        Err(err) => {
            tracing::error!(error = %err, "MongoDB liveness probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Connection to MongoDB failed: {err}"))),
            )
        }
    }
}

/// Mount the datastore health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/check_mongo", get(check_mongo))
}
