use serde_json::Value;
use tracing::{info, warn};

use crate::modules::projects::application::domain::entities::ProjectRecord;
use crate::modules::projects::application::domain::seed::default_projects;
use crate::modules::projects::application::ports::outgoing::{ProjectCache, PROJECTS_LOCAL_KEY};
use crate::shared::lenient::record_or_default;
use crate::shared::storage::{read_or_none, KeyValueStore, StorageError};

/// [`ProjectCache`] kept as a JSON array under [`PROJECTS_LOCAL_KEY`].
#[derive(Debug, Clone)]
pub struct StoredProjectCache<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> StoredProjectCache<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> ProjectCache for StoredProjectCache<S>
where
    S: KeyValueStore,
{
    fn ensure_seeded(&self) -> Result<bool, StorageError> {
        let existing = self.store.get_item(PROJECTS_LOCAL_KEY)?;
        if existing.is_some_and(|raw| !raw.is_empty()) {
            return Ok(false);
        }

        let seed = serde_json::to_string(&default_projects())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.store.set_item(PROJECTS_LOCAL_KEY, &seed)?;

        info!(key = PROJECTS_LOCAL_KEY, "Seeded local project cache");
        Ok(true)
    }

    fn load(&self) -> Vec<ProjectRecord> {
        let Some(raw) = read_or_none(&self.store, PROJECTS_LOCAL_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items.into_iter().map(record_or_default).collect(),
            Ok(_) => {
                warn!(key = PROJECTS_LOCAL_KEY, "Cached projects are not a list");
                Vec::new()
            }
            Err(e) => {
                warn!(key = PROJECTS_LOCAL_KEY, error = %e, "Cached projects are malformed");
                Vec::new()
            }
        }
    }
}
