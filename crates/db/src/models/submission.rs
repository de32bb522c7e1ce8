//! The persisted submission document.

use guestbook_core::submission::ValidSubmission;
use serde::{Deserialize, Serialize};

/// A document in the submissions collection.
///
/// Flat, schema-less record: two trimmed text fields plus the `visited`
/// flag. Documents are independent -- no uniqueness constraint, no
/// cross-document relationships, create-only lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub username: String,
    pub phone_number: String,
    pub visited: bool,
}

impl Submission {
    /// Construct a new submission. This is the only place `visited` is
    /// initialized; it is always `false` at creation and is not
    /// caller-settable.
    pub fn new(username: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            phone_number: phone_number.into(),
            visited: false,
        }
    }
}

impl From<ValidSubmission> for Submission {
    fn from(input: ValidSubmission) -> Self {
        Self::new(input.username, input.phone_number)
    }
}
