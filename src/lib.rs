//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod insights;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use processing::analyzer::{AnalysisEngine, AnalysisResult};
