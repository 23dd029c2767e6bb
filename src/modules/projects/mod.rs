pub mod adapter;
pub mod application;

pub use application::domain::entities::ProjectRecord;
pub use application::services::{ProjectsPageService, ProjectsRegion};
