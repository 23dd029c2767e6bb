mod http_json_source;
pub mod remote_source;
pub mod unwrap;

pub use http_json_source::HttpJsonSource;
pub use remote_source::{RemoteDocumentSource, RemoteFetchError};
