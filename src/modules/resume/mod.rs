pub mod adapter;
pub mod application;

pub use application::domain::entities::ResumeDocument;
pub use application::domain::view::ResumeView;
pub use application::services::{ResumePageService, ResumeRegion};
