use crate::modules::projects::application::domain::entities::ProjectRecord;
use crate::shared::storage::StorageError;

pub const PROJECTS_LOCAL_KEY: &str = "sc-projects-local";

/// Locally cached project list.
pub trait ProjectCache: Send + Sync {
    /// Writes the default records if nothing is cached yet. Returns whether
    /// a write happened. Existing data is never replaced.
    fn ensure_seeded(&self) -> Result<bool, StorageError>;

    /// Cached records; unreadable or malformed data reads as empty.
    fn load(&self) -> Vec<ProjectRecord>;
}
