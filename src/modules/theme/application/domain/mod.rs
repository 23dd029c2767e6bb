pub mod entities;
pub mod options;
