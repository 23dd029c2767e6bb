pub mod projects_page_service;

pub use projects_page_service::{ProjectsPageService, ProjectsRegion};
