pub mod domain;
mod project_card;

pub use domain::attributes::{CardAttribute, CardAttributes};
pub use domain::view::{CardLink, CardView, Thumbnail, DEFAULT_LINK_LABEL};
pub use project_card::{CardLifecycle, ProjectCard};
