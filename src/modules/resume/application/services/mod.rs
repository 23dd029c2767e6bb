pub mod resume_page_service;

pub use resume_page_service::{ResumePageService, ResumeRegion};
