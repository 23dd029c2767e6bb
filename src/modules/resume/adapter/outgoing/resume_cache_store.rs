use serde_json::Value;
use tracing::{info, warn};

use crate::modules::resume::application::domain::entities::ResumeDocument;
use crate::modules::resume::application::domain::seed::default_resume;
use crate::modules::resume::application::ports::outgoing::{ResumeCache, RESUME_LOCAL_KEY};
use crate::shared::lenient::record_or_default;
use crate::shared::storage::{read_or_none, KeyValueStore, StorageError};

/// [`ResumeCache`] kept as a JSON object under [`RESUME_LOCAL_KEY`].
#[derive(Debug, Clone)]
pub struct StoredResumeCache<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> StoredResumeCache<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> ResumeCache for StoredResumeCache<S>
where
    S: KeyValueStore,
{
    fn ensure_seeded(&self) -> Result<bool, StorageError> {
        let existing = self.store.get_item(RESUME_LOCAL_KEY)?;
        if existing.is_some_and(|raw| !raw.is_empty()) {
            return Ok(false);
        }

        let seed = serde_json::to_string(&default_resume())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.store.set_item(RESUME_LOCAL_KEY, &seed)?;

        info!(key = RESUME_LOCAL_KEY, "Seeded local resume cache");
        Ok(true)
    }

    fn load(&self) -> ResumeDocument {
        let Some(raw) = read_or_none(&self.store, RESUME_LOCAL_KEY) else {
            return ResumeDocument::default();
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value @ Value::Object(_)) => record_or_default(value),
            Ok(_) => {
                warn!(key = RESUME_LOCAL_KEY, "Cached resume is not an object");
                ResumeDocument::default()
            }
            Err(e) => {
                warn!(key = RESUME_LOCAL_KEY, error = %e, "Cached resume is malformed");
                ResumeDocument::default()
            }
        }
    }
}
