//! Text processing and analysis module

pub mod analyzer;
pub mod key_phrases;
pub mod match_scorer;
pub mod similarity;
pub mod skill_extractor;
pub mod skill_gaps;
pub mod taxonomy;
pub mod text_processor;
pub mod text_quality;

pub use analyzer::{AnalysisEngine, AnalysisResult};
pub use taxonomy::{SkillCategory, SkillSet};
