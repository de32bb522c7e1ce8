//! Shared response envelope for API handlers.
//!
//! Every JSON response uses the `{ "status": ..., "message": ... }`
//! envelope, with `message` omitted when there is nothing to say. Use
//! [`ApiResponse`] instead of ad-hoc `serde_json::json!` so the wire shape
//! stays consistent across handlers.

use serde::Serialize;

/// Standard `{ "status", "message" }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// `{"status":"success"}` -- a bare success marker.
    pub fn success() -> Self {
        Self {
            status: "success",
            message: None,
        }
    }

    /// `{"status":"success","message":...}`.
    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
        }
    }

    /// `{"status":"error","message":...}`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }
}
