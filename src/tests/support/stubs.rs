use async_trait::async_trait;
use serde_json::Value;

use crate::shared::remote::{RemoteDocumentSource, RemoteFetchError};
use crate::shared::storage::{KeyValueStore, StorageError};

/// Remote document source answering every fetch with the same result.
#[derive(Debug, Clone)]
pub struct StubDocumentSource {
    result: Result<Value, RemoteFetchError>,
}

impl StubDocumentSource {
    pub fn ok(value: Value) -> Self {
        Self { result: Ok(value) }
    }

    pub fn err(error: RemoteFetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl RemoteDocumentSource for StubDocumentSource {
    async fn fetch_json(&self) -> Result<Value, RemoteFetchError> {
        self.result.clone()
    }

    fn describe(&self) -> String {
        "stub document".to_string()
    }
}

/// Store whose every call fails, like storage blocked by the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("blocked".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("blocked".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("blocked".to_string()))
    }
}
