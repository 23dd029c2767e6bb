pub mod adapter;
pub mod application;

pub use application::domain::entities::{CustomTheme, Preset, ThemeName};
pub use application::services::{ThemePanel, ThemeService};
