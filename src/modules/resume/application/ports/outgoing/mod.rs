use async_trait::async_trait;

use crate::modules::resume::application::domain::entities::ResumeDocument;
use crate::shared::remote::RemoteFetchError;
use crate::shared::storage::StorageError;

pub const RESUME_LOCAL_KEY: &str = "sc-resume-local";

/// Locally cached resume.
pub trait ResumeCache: Send + Sync {
    /// Writes the default resume if nothing is cached yet; never replaces data.
    fn ensure_seeded(&self) -> Result<bool, StorageError>;

    /// Cached resume; unreadable or malformed data reads as empty.
    fn load(&self) -> ResumeDocument;
}

/// Remotely hosted resume.
#[async_trait]
pub trait ResumeFeed: Send + Sync {
    async fn fetch(&self) -> Result<ResumeDocument, RemoteFetchError>;
}
