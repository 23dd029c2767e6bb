pub mod entities;
pub mod fields;
pub mod validity;
