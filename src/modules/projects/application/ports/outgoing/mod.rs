pub mod project_cache;
pub mod project_feed;

pub use project_cache::{ProjectCache, PROJECTS_LOCAL_KEY};
pub use project_feed::ProjectFeed;
