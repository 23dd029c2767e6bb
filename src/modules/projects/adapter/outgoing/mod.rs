mod project_cache_store;
mod project_feed_remote;

pub use project_cache_store::StoredProjectCache;
pub use project_feed_remote::RemoteProjectFeed;
