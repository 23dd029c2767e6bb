use async_trait::async_trait;

use crate::modules::contact_form::application::domain::entities::Submission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Form endpoint rejected submission: {0}")]
    Rejected(u16),
    #[error("No form action configured")]
    NoAction,
}

/// Delivers a validated submission to the form's action.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}
