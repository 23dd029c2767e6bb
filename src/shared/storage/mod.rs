mod in_memory_store;
mod json_file_store;
pub mod key_value_store;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use key_value_store::{KeyValueStore, StorageError};

/// Reads `key` and treats any storage failure as absent data.
pub fn read_or_none<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, treating as empty");
            None
        }
    }
}
