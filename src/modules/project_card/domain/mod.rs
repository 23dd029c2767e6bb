pub mod attributes;
pub mod view;
