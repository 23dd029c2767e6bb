pub mod document_root;
pub mod environment;

pub use document_root::DocumentRoot;
pub use environment::{ColorSchemePreference, ViewTransitions};

pub const THEME_KEY: &str = "sc-theme";
pub const CUSTOM_THEME_KEY: &str = "sc-theme-custom";
