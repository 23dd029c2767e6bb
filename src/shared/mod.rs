pub mod clock;
pub mod html;
pub mod lenient;
pub mod loading;
pub mod remote;
pub mod sequencing;
pub mod storage;
