//! Main analysis engine combining skill extraction, similarity, gap analysis
//! and the advice generators

use crate::config::{Config, MatchMode, NoiseMode, ScoringConfig};
use crate::error::Result;
use crate::insights::{
    generate_actionable_recommendations, generate_interview_questions, generate_suggestions,
    ActionableRecommendations, InsightContext, InterviewQuestion, Suggestion,
};
use crate::processing::key_phrases::{extract_key_phrases, KeyPhrase};
use crate::processing::match_scorer::{calculate_match_score, MatchLevel, MatchResult};
use crate::processing::similarity::{calculate_similarity, noise_source, NoiseSource, SimilarityMetrics};
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::skill_gaps::{analyze_skill_gaps, SkillGapReport};
use crate::processing::taxonomy::{skill_count, SkillSet};
use crate::processing::text_processor::{truncate_chars, word_count};
use crate::processing::text_quality::{analyze_text_quality, TextQualityReport};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const PREVIEW_CHARS: usize = 200;
const READING_WORDS_PER_MINUTE: usize = 200;
const PROCESSING_METHOD: &str = "Local Heuristic Analysis";
const MATCH_PROCESSING_METHOD: &str = "Lexical Heuristics";
const COMPONENTS: [&str; 3] = ["Skill Extraction", "Similarity Analysis", "Rule-Based Insights"];

/// Main analysis engine that coordinates all analysis components
pub struct AnalysisEngine {
    extractor: SkillExtractor,
    noise: Box<dyn NoiseSource>,
    noise_mode: NoiseMode,
    scoring: ScoringConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    pub match_analysis: MatchAnalysis,
    pub improvement_suggestions: Vec<Suggestion>,
    pub interview_questions: Vec<InterviewQuestion>,
    pub actionable_recommendations: ActionableRecommendations,
    pub resume_preview: ResumePreview,
    pub analysis_metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub match_score: u8,
    pub match_level: MatchLevel,
    pub match_color: String,
    pub similarity_metrics: SimilarityMetrics,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub skill_gaps: SkillGapReport,
    pub resume_key_phrases: Vec<KeyPhrase>,
    pub job_key_phrases: Vec<KeyPhrase>,
    pub text_quality_analysis: TextQualityReport,
    pub analysis_metadata: WordTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTotals {
    pub total_resume_words: usize,
    pub total_job_words: usize,
    pub processing_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumePreview {
    pub first_200_chars: String,
    pub word_count: usize,
    pub estimated_reading_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// RFC 3339
    pub timestamp: String,
    pub processing_method: String,
    pub components: Vec<String>,
    pub total_skills_identified: usize,
    pub processing_time_ms: u64,
    pub noise_mode: NoiseMode,
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEngineStats {
    pub taxonomy_skills: usize,
    pub match_mode: MatchMode,
    pub noise_mode: NoiseMode,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let extractor = SkillExtractor::new(config.matching.mode)?;
        let noise_mode = config.similarity.noise;

        log::debug!(
            "Analysis engine ready: match mode {:?}, noise {:?}",
            config.matching.mode,
            noise_mode
        );

        Ok(Self {
            extractor,
            noise: noise_source(noise_mode),
            noise_mode,
            scoring: config.scoring.clone(),
        })
    }

    /// Full analysis of a resume against a job description. Never fails:
    /// empty or degenerate inputs produce zero or empty values.
    pub fn analyze(&mut self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let start_time = Instant::now();

        // 1. Skills
        let resume_skills = self.extractor.extract_skills(resume_text);
        let job_skills = self.extractor.extract_skills(job_text);
        log::debug!(
            "Extracted {} resume skills and {} job skills",
            count_skills(&resume_skills),
            count_skills(&job_skills)
        );

        // 2. Similarity
        let similarity_metrics = calculate_similarity(resume_text, job_text, self.noise.as_mut());
        log::debug!(
            "Keyword overlap {:.3}, overall similarity {:.3}",
            similarity_metrics.keyword_overlap,
            similarity_metrics.overall_similarity
        );

        // 3. Gaps and score
        let skill_gaps = analyze_skill_gaps(&resume_skills, &job_skills);
        let score = calculate_match_score(&similarity_metrics, &skill_gaps, &self.scoring);
        let match_result = MatchResult::from_score(score);
        log::debug!(
            "Skill coverage {:.3} ({}/{})",
            skill_gaps.overall_skill_coverage,
            skill_gaps.total_skills_matched,
            skill_gaps.total_skills_required
        );

        // 4. Advice
        let ctx = InsightContext {
            resume_text,
            job_text,
            skill_gaps: &skill_gaps,
        };
        let improvement_suggestions = generate_suggestions(&ctx);
        let interview_questions = generate_interview_questions(&ctx);
        let actionable_recommendations = generate_actionable_recommendations(&ctx);

        let resume_words = word_count(resume_text);
        let total_skills_identified = count_skills(&resume_skills) + count_skills(&job_skills);

        let match_analysis = MatchAnalysis {
            match_score: match_result.match_score,
            match_level: match_result.match_level,
            match_color: match_result.match_color,
            similarity_metrics,
            resume_key_phrases: extract_key_phrases(resume_text),
            job_key_phrases: extract_key_phrases(job_text),
            text_quality_analysis: analyze_text_quality(resume_text),
            analysis_metadata: WordTotals {
                total_resume_words: resume_words,
                total_job_words: word_count(job_text),
                processing_method: MATCH_PROCESSING_METHOD.to_string(),
            },
            resume_skills,
            job_skills,
            skill_gaps,
        };

        let processing_time = start_time.elapsed();
        log::info!(
            "Analysis completed: match score {} ({}) in {} ms",
            match_analysis.match_score,
            match_analysis.match_level,
            processing_time.as_millis()
        );

        AnalysisResult {
            status: AnalysisStatus::Completed,
            match_analysis,
            improvement_suggestions,
            interview_questions,
            actionable_recommendations,
            resume_preview: ResumePreview {
                first_200_chars: truncate_chars(resume_text, PREVIEW_CHARS),
                word_count: resume_words,
                estimated_reading_time: format!("{} min", resume_words.div_ceil(READING_WORDS_PER_MINUTE)),
            },
            analysis_metadata: AnalysisMetadata {
                timestamp: Utc::now().to_rfc3339(),
                processing_method: PROCESSING_METHOD.to_string(),
                components: COMPONENTS.iter().map(|c| c.to_string()).collect(),
                total_skills_identified,
                processing_time_ms: processing_time.as_millis() as u64,
                noise_mode: self.noise_mode,
                match_mode: self.extractor.mode(),
            },
        }
    }

    pub fn get_stats(&self) -> AnalysisEngineStats {
        AnalysisEngineStats {
            taxonomy_skills: skill_count(),
            match_mode: self.extractor.mode(),
            noise_mode: self.noise_mode,
        }
    }
}

fn count_skills(skills: &SkillSet) -> usize {
    skills.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::taxonomy::SkillCategory;

    fn neutral_engine() -> AnalysisEngine {
        let mut config = Config::default();
        config.similarity.noise = NoiseMode::Neutral;
        AnalysisEngine::new(&config).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = neutral_engine();
        let stats = engine.get_stats();
        assert_eq!(stats.taxonomy_skills, skill_count());
        assert_eq!(stats.match_mode, MatchMode::Substring);
        assert_eq!(stats.noise_mode, NoiseMode::Neutral);
    }

    #[test]
    fn test_empty_inputs() {
        let mut engine = neutral_engine();
        let result = engine.analyze("", "");

        assert_eq!(result.status, AnalysisStatus::Completed);
        assert!(result.match_analysis.resume_skills.is_empty());
        assert_eq!(result.match_analysis.skill_gaps.overall_skill_coverage, 1.0);
        assert_eq!(result.match_analysis.similarity_metrics.keyword_overlap, 1.0);
        assert_eq!(result.resume_preview.word_count, 0);
        assert_eq!(result.resume_preview.estimated_reading_time, "0 min");
        assert_eq!(result.analysis_metadata.total_skills_identified, 0);
    }

    #[test]
    fn test_resume_preview() {
        let mut engine = neutral_engine();
        let resume = "word ".repeat(250);
        let result = engine.analyze(&resume, "Python developer");

        assert_eq!(result.resume_preview.first_200_chars.chars().count(), 200);
        assert_eq!(result.resume_preview.word_count, 250);
        assert_eq!(result.resume_preview.estimated_reading_time, "2 min");
        assert_eq!(result.match_analysis.analysis_metadata.total_job_words, 2);
    }

    #[test]
    fn test_metadata() {
        let mut engine = neutral_engine();
        let result = engine.analyze("React and Python", "React, Python and Docker");

        assert_eq!(result.analysis_metadata.total_skills_identified, 5);
        assert_eq!(result.analysis_metadata.components.len(), 3);
        assert_eq!(result.analysis_metadata.noise_mode, NoiseMode::Neutral);
        assert!(chrono::DateTime::parse_from_rfc3339(&result.analysis_metadata.timestamp).is_ok());
        assert_eq!(
            result.match_analysis.skill_gaps.missing_skills[&SkillCategory::TechnicalSkills],
            vec!["Docker".to_string()]
        );
    }

    #[test]
    fn test_result_serializes() {
        let mut engine = neutral_engine();
        let result = engine.analyze("Built APIs with Python", "Python API engineer");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "completed");
        assert!(json["match_analysis"]["job_skills"]["Technical Skills"].is_array());
        assert!(json["match_analysis"]["match_score"].is_u64());
    }
}
