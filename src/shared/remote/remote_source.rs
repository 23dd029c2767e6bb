use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote fetch failed: {0}")]
    Status(u16),

    #[error("Malformed JSON: {0}")]
    Parse(String),
}

/// A fixed remote JSON document. One call issues exactly one request; there
/// is no retry or de-duplication.
#[async_trait]
pub trait RemoteDocumentSource: Send + Sync {
    async fn fetch_json(&self) -> Result<Value, RemoteFetchError>;

    /// Where the document lives, for logging.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T> RemoteDocumentSource for std::sync::Arc<T>
where
    T: RemoteDocumentSource + ?Sized,
{
    async fn fetch_json(&self) -> Result<Value, RemoteFetchError> {
        (**self).fetch_json().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
