use async_trait::async_trait;
use tracing::warn;
use serde_json::Value;

use crate::modules::resume::application::domain::entities::ResumeDocument;
use crate::modules::resume::application::ports::outgoing::ResumeFeed;
use crate::shared::lenient::record_or_default;
use crate::shared::remote::unwrap::unwrap_record_object;
use crate::shared::remote::{RemoteDocumentSource, RemoteFetchError};

/// [`ResumeFeed`] over a hosted JSON document.
#[derive(Debug, Clone)]
pub struct RemoteResumeFeed<R>
where
    R: RemoteDocumentSource,
{
    source: R,
}

impl<R> RemoteResumeFeed<R>
where
    R: RemoteDocumentSource,
{
    pub fn new(source: R) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<R> ResumeFeed for RemoteResumeFeed<R>
where
    R: RemoteDocumentSource,
{
    async fn fetch(&self) -> Result<ResumeDocument, RemoteFetchError> {
        let data = self.source.fetch_json().await.map_err(|e| {
            warn!(
                source = %self.source.describe(),
                error = %e,
                "Remote resume document unavailable"
            );
            e
        })?;

        Ok(unwrap_record_object(data)
            .map(|map| record_or_default(Value::Object(map)))
            .unwrap_or_default())
    }
}
