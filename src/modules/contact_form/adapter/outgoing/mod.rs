mod form_submitter_http;

pub use form_submitter_http::HttpFormSubmitter;
