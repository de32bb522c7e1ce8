//! Repository for the submissions collection.

use mongodb::Collection;

use crate::models::submission::Submission;

/// Provides the create-only persistence surface for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Persist one submission. Exactly one document per successful call;
    /// nothing is retried on failure -- the caller must resubmit.
    pub async fn insert(
        collection: &Collection<Submission>,
        submission: &Submission,
    ) -> Result<(), mongodb::error::Error> {
        collection.insert_one(submission).await?;
        Ok(())
    }
}
