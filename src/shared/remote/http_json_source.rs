use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::remote_source::{RemoteDocumentSource, RemoteFetchError};

/// `GET`s a JSON document over HTTPS with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: reqwest::Client,
    url: String,
}

impl HttpJsonSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RemoteDocumentSource for HttpJsonSource {
    async fn fetch_json(&self) -> Result<Value, RemoteFetchError> {
        debug!(url = %self.url, "Fetching remote document");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RemoteFetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| RemoteFetchError::Parse(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
