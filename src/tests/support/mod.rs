pub mod stubs;

use std::path::PathBuf;

/// Fresh path under the system temp dir; the file is not created.
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("portfolio-store-{}.json", uuid::Uuid::new_v4()))
}
