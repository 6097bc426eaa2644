//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod manager;
pub mod sample;
pub mod text_extractor;

pub use manager::InputManager;
pub use sample::sample_resume_text;
