use async_trait::async_trait;
use tracing::warn;

use crate::modules::projects::application::domain::entities::ProjectRecord;
use crate::modules::projects::application::ports::outgoing::ProjectFeed;
use crate::shared::lenient::record_or_default;
use crate::shared::remote::unwrap::unwrap_record_array;
use crate::shared::remote::{RemoteDocumentSource, RemoteFetchError};

/// [`ProjectFeed`] over a hosted JSON document.
#[derive(Debug, Clone)]
pub struct RemoteProjectFeed<R>
where
    R: RemoteDocumentSource,
{
    source: R,
}

impl<R> RemoteProjectFeed<R>
where
    R: RemoteDocumentSource,
{
    pub fn new(source: R) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<R> ProjectFeed for RemoteProjectFeed<R>
where
    R: RemoteDocumentSource,
{
    async fn fetch(&self) -> Result<Vec<ProjectRecord>, RemoteFetchError> {
        let data = self.source.fetch_json().await.map_err(|e| {
            warn!(
                source = %self.source.describe(),
                error = %e,
                "Remote projects document unavailable"
            );
            e
        })?;

        Ok(unwrap_record_array(data)
            .into_iter()
            .map(record_or_default)
            .collect())
    }
}
