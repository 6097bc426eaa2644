//! Final 0-100 match score and qualitative level

use crate::config::ScoringConfig;
use crate::processing::similarity::SimilarityMetrics;
use crate::processing::skill_gaps::SkillGapReport;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchLevel {
    /// Inclusive lower bounds: 85, 70, 50.
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => MatchLevel::Excellent,
            70..=84 => MatchLevel::Good,
            50..=69 => MatchLevel::Fair,
            _ => MatchLevel::Poor,
        }
    }

    /// Display color token for renderers.
    pub fn color(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "#10B981",
            MatchLevel::Good => "#3B82F6",
            MatchLevel::Fair => "#F59E0B",
            MatchLevel::Poor => "#EF4444",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchLevel::Excellent => "Excellent",
            MatchLevel::Good => "Good",
            MatchLevel::Fair => "Fair",
            MatchLevel::Poor => "Poor",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: u8,
    pub match_level: MatchLevel,
    pub match_color: String,
}

impl MatchResult {
    pub fn from_score(match_score: u8) -> Self {
        let match_level = MatchLevel::from_score(match_score);
        Self {
            match_score,
            match_level,
            match_color: match_level.color().to_string(),
        }
    }
}

/// Weighted blend of overall similarity and overall skill coverage, on a
/// 0-100 scale.
pub fn calculate_match_score(similarity: &SimilarityMetrics, gaps: &SkillGapReport, weights: &ScoringConfig) -> u8 {
    let similarity_points = similarity.overall_similarity * weights.similarity_weight * 100.0;
    let coverage_points = gaps.overall_skill_coverage * weights.coverage_weight * 100.0;

    (similarity_points + coverage_points).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::taxonomy::SkillSet;
    use std::collections::BTreeMap;

    fn similarity(overall: f64) -> SimilarityMetrics {
        SimilarityMetrics {
            semantic_similarity: overall,
            keyword_overlap: overall,
            tfidf_similarity: overall,
            overall_similarity: overall,
        }
    }

    fn gaps(coverage: f64) -> SkillGapReport {
        SkillGapReport {
            matching_skills: SkillSet::new(),
            missing_skills: SkillSet::new(),
            skill_coverage: BTreeMap::new(),
            priority_gaps: SkillSet::new(),
            strength_areas: SkillSet::new(),
            total_skills_required: 0,
            total_skills_matched: 0,
            overall_skill_coverage: coverage,
        }
    }

    fn default_weights() -> ScoringConfig {
        ScoringConfig {
            similarity_weight: 0.5,
            coverage_weight: 0.5,
        }
    }

    #[test]
    fn test_score_blend() {
        let w = default_weights();
        assert_eq!(calculate_match_score(&similarity(1.0), &gaps(1.0), &w), 100);
        assert_eq!(calculate_match_score(&similarity(0.0), &gaps(0.0), &w), 0);
        assert_eq!(calculate_match_score(&similarity(0.4), &gaps(0.667), &w), 53);
        assert_eq!(calculate_match_score(&similarity(0.25), &gaps(0.0), &w), 13);
    }

    #[test]
    fn test_score_is_monotonic_and_bounded() {
        let w = default_weights();
        let steps: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();

        for &cov in &steps {
            let mut previous = 0u8;
            for &sim in &steps {
                let score = calculate_match_score(&similarity(sim), &gaps(cov), &w);
                assert!(score >= previous);
                assert!(score <= 100);
                previous = score;
            }
        }
        for &sim in &steps {
            let mut previous = 0u8;
            for &cov in &steps {
                let score = calculate_match_score(&similarity(sim), &gaps(cov), &w);
                assert!(score >= previous);
                previous = score;
            }
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(85), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(84), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(70), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(69), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(50), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(49), MatchLevel::Poor);
        assert_eq!(MatchLevel::from_score(0), MatchLevel::Poor);
    }

    #[test]
    fn test_match_result_color() {
        let result = MatchResult::from_score(72);
        assert_eq!(result.match_level, MatchLevel::Good);
        assert_eq!(result.match_color, "#3B82F6");
        assert_eq!(result.match_level.to_string(), "Good");
    }
}
