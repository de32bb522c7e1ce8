//! Submission validator -- pure logic, no database access.
//!
//! Normalizes a raw JSON payload into an accepted submission or a
//! rejection with a fixed, caller-facing reason.

use serde_json::Value;

use crate::error::CoreError;

/// Rejection reason returned whenever either required field is missing or
/// empty after trimming.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Both username and phone_number are required.";

/// A submission that passed validation. Field values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub username: String,
    pub phone_number: String,
}

/// Validate a raw request payload.
///
/// Accepts iff both `username` and `phone_number` are present, are JSON
/// strings, and are non-empty after trimming leading/trailing whitespace.
/// Absent keys, `null`, non-string values, and whitespace-only strings all
/// resolve to rejection -- never to a panic or error of any other kind.
/// The payload itself may be any JSON value; a non-object top level simply
/// has no fields.
pub fn validate_submission(payload: &Value) -> Result<ValidSubmission, CoreError> {
    match (
        trimmed_field(payload, "username"),
        trimmed_field(payload, "phone_number"),
    ) {
        (Some(username), Some(phone_number)) => Ok(ValidSubmission {
            username,
            phone_number,
        }),
        _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

/// Extract a field as a trimmed, non-empty string. Anything else is `None`.
fn trimmed_field(payload: &Value, key: &str) -> Option<String> {
    let trimmed = payload.get(key)?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
