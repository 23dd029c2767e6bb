pub mod config;
pub mod modules;
pub mod shared;

pub use modules::contact_form;
pub use modules::project_card;
pub use modules::projects;
pub use modules::resume;
pub use modules::theme;

#[cfg(test)]
mod tests;
