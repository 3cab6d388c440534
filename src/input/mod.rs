//! Input handling
//! Resolves resume and job description text from files or inline arguments

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::{InputManager, InputSource};
