use async_trait::async_trait;

use crate::modules::projects::application::domain::entities::ProjectRecord;
use crate::shared::remote::RemoteFetchError;

/// Remotely hosted project list.
#[async_trait]
pub trait ProjectFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ProjectRecord>, RemoteFetchError>;
}
