use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::contact_form::application::domain::entities::Submission;
use crate::modules::contact_form::application::ports::outgoing::{FormSubmitter, SubmitError};

/// `POST`s the submission as JSON to the form action URL.
#[derive(Debug, Clone)]
pub struct HttpFormSubmitter {
    client: reqwest::Client,
    action: String,
}

impl HttpFormSubmitter {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            action: action.into(),
        }
    }
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        if self.action.trim().is_empty() {
            return Err(SubmitError::NoAction);
        }

        debug!(action = %self.action, "Posting contact form");

        let resp = self
            .client
            .post(&self.action)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Contact form endpoint refused submission");
            return Err(SubmitError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
