pub mod contact_form;
pub mod project_card;
pub mod projects;
pub mod resume;
pub mod theme;
