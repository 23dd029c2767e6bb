mod resume_cache_store;
mod resume_feed_remote;

pub use resume_cache_store::StoredResumeCache;
pub use resume_feed_remote::RemoteResumeFeed;
