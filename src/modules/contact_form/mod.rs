pub mod adapter;
pub mod application;

pub use application::domain::entities::{FormErrorRecord, Submission};
pub use application::domain::fields::{ContactFormSchema, FieldName, SchemaError};
pub use application::services::{ContactFormService, InfoArea, SubmitOutcome};
