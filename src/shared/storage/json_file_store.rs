use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use super::key_value_store::{KeyValueStore, StorageError};

/// Key/value store persisted as a single JSON object on disk.
///
/// Stands in for browser `localStorage` when the controllers run outside a
/// browser (the CLI). Every write rewrites the whole file; an unreadable or
/// malformed file is treated as empty storage.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = Self::read_file(&path);
        debug!(path = %path.display(), entries = items.len(), "Opened JSON file store");

        Self {
            path,
            items: RwLock::new(items),
        }
    }

    fn read_file(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Store file is malformed, starting empty");
            BTreeMap::new()
        })
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        fs::write(&self.path, body).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        if items.remove(key).is_some() {
            self.flush(&items)?;
        }
        Ok(())
    }
}
