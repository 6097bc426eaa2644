//! Resume improvement suggestions

use crate::insights::{Impact, InsightContext, Priority};
use crate::processing::taxonomy::SkillCategory;
use crate::processing::text_processor::keyword_tokens;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+%").expect("Invalid percentage regex"));

static LEADERSHIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)led|managed|supervised").expect("Invalid leadership regex"));

const SHORT_RESUME_CHARS: usize = 1000;
const SKILLS_NAMED: usize = 3;
const KEYWORDS_NAMED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionType {
    Skills,
    Content,
    Format,
    Keywords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub suggestion: String,
    pub impact: Impact,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRule {
    /// One entry per category with missing skills
    MissingSkills,
    /// No percentages and no mention of quantifying
    QuantifyAchievements,
    /// No leadership wording
    LeadershipLanguage,
    /// Resume under 1000 characters
    Brevity,
    /// Job words (4+ characters) the resume never uses
    KeywordGap,
}

impl SuggestionRule {
    pub const ALL: [SuggestionRule; 5] = [
        SuggestionRule::MissingSkills,
        SuggestionRule::QuantifyAchievements,
        SuggestionRule::LeadershipLanguage,
        SuggestionRule::Brevity,
        SuggestionRule::KeywordGap,
    ];

    pub fn apply(&self, ctx: &InsightContext<'_>) -> Vec<Suggestion> {
        match self {
            SuggestionRule::MissingSkills => ctx
                .skill_gaps
                .missing_skills
                .iter()
                .filter(|(_, skills)| !skills.is_empty())
                .map(|(category, skills)| Suggestion {
                    suggestion_type: SuggestionType::Skills,
                    suggestion: format!(
                        "Consider developing skills in {}: {}. These are commonly required for this role.",
                        category,
                        skills.iter().take(SKILLS_NAMED).cloned().collect::<Vec<_>>().join(", ")
                    ),
                    impact: Impact::High,
                    priority: if *category == SkillCategory::TechnicalSkills {
                        Priority::High
                    } else {
                        Priority::Medium
                    },
                })
                .collect(),

            SuggestionRule::QuantifyAchievements => {
                let mentions_quantifying = ctx.resume_text.to_lowercase().contains("quantif");
                if mentions_quantifying || PERCENTAGE.is_match(ctx.resume_text) {
                    return Vec::new();
                }
                vec![Suggestion {
                    suggestion_type: SuggestionType::Content,
                    suggestion: "Add quantifiable achievements to your resume. Include specific numbers, percentages, and metrics to demonstrate your impact.".to_string(),
                    impact: Impact::High,
                    priority: Priority::High,
                }]
            }

            SuggestionRule::LeadershipLanguage => {
                if LEADERSHIP.is_match(ctx.resume_text) {
                    return Vec::new();
                }
                vec![Suggestion {
                    suggestion_type: SuggestionType::Content,
                    suggestion: "Highlight any leadership or management experience you have, even if informal. This adds value to your profile.".to_string(),
                    impact: Impact::Medium,
                    priority: Priority::Medium,
                }]
            }

            SuggestionRule::Brevity => {
                if ctx.resume_text.chars().count() >= SHORT_RESUME_CHARS {
                    return Vec::new();
                }
                vec![Suggestion {
                    suggestion_type: SuggestionType::Format,
                    suggestion: "Your resume appears quite brief. Consider expanding on your experiences and achievements to provide more context.".to_string(),
                    impact: Impact::Medium,
                    priority: Priority::Medium,
                }]
            }

            SuggestionRule::KeywordGap => {
                let missing = missing_keywords(ctx.resume_text, ctx.job_text);
                if missing.is_empty() {
                    return Vec::new();
                }
                vec![Suggestion {
                    suggestion_type: SuggestionType::Keywords,
                    suggestion: format!(
                        "Consider naturally incorporating these relevant keywords from the job description: {}.",
                        missing.into_iter().take(KEYWORDS_NAMED).collect::<Vec<_>>().join(", ")
                    ),
                    impact: Impact::Medium,
                    priority: Priority::High,
                }]
            }
        }
    }
}

/// Job words absent from the resume, deduplicated, in order of first use.
pub fn missing_keywords(resume_text: &str, job_text: &str) -> Vec<String> {
    let resume_words: HashSet<String> = keyword_tokens(resume_text).into_iter().collect();
    let mut seen = HashSet::new();

    keyword_tokens(job_text)
        .into_iter()
        .filter(|word| !resume_words.contains(word))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

pub fn generate_suggestions(ctx: &InsightContext<'_>) -> Vec<Suggestion> {
    SuggestionRule::ALL.iter().flat_map(|rule| rule.apply(ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{gaps, skills};
    use crate::processing::taxonomy::SkillSet;

    #[test]
    fn test_missing_skills_per_category() {
        let resume = skills(vec![(SkillCategory::TechnicalSkills, vec!["React"])]);
        let job = skills(vec![
            (SkillCategory::TechnicalSkills, vec!["React", "Python", "Docker", "AWS", "Redis"]),
            (SkillCategory::SoftSkills, vec!["Leadership"]),
        ]);
        let report = gaps(&resume, &job);
        let ctx = InsightContext {
            resume_text: "",
            job_text: "",
            skill_gaps: &report,
        };

        let out = SuggestionRule::MissingSkills.apply(&ctx);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].suggestion,
            "Consider developing skills in Technical Skills: Python, Docker, AWS. These are commonly required for this role."
        );
        assert_eq!(out[0].priority, Priority::High);
        assert_eq!(out[0].impact, Impact::High);
        assert_eq!(out[1].priority, Priority::Medium);
    }

    #[test]
    fn test_content_rules() {
        let empty = SkillSet::new();
        let report = gaps(&empty, &empty);
        let weak = InsightContext {
            resume_text: "Wrote code for the team",
            job_text: "",
            skill_gaps: &report,
        };
        assert_eq!(SuggestionRule::QuantifyAchievements.apply(&weak).len(), 1);
        assert_eq!(SuggestionRule::LeadershipLanguage.apply(&weak).len(), 1);
        assert_eq!(SuggestionRule::Brevity.apply(&weak).len(), 1);

        let strong_text = format!("Managed a team and cut costs by 30%. {}", "Shipped features. ".repeat(60));
        let strong = InsightContext {
            resume_text: &strong_text,
            ..weak
        };
        assert!(SuggestionRule::QuantifyAchievements.apply(&strong).is_empty());
        assert!(SuggestionRule::LeadershipLanguage.apply(&strong).is_empty());
        assert!(SuggestionRule::Brevity.apply(&strong).is_empty());
    }

    #[test]
    fn test_keyword_gap_dedupes_and_caps() {
        let missing = missing_keywords(
            "Python services",
            "Python services with Kafka, Kafka streams, Terraform, gRPC, Redis caching and Kubernetes",
        );
        assert_eq!(
            missing,
            vec!["with", "kafka", "streams", "terraform", "grpc", "redis", "caching", "kubernetes"]
        );

        let empty = SkillSet::new();
        let report = gaps(&empty, &empty);
        let ctx = InsightContext {
            resume_text: "Python services",
            job_text: "Python services with Kafka, Kafka streams, Terraform, gRPC, Redis",
            skill_gaps: &report,
        };
        let out = SuggestionRule::KeywordGap.apply(&ctx);
        assert_eq!(
            out[0].suggestion,
            "Consider naturally incorporating these relevant keywords from the job description: with, kafka, streams, terraform, grpc."
        );
        assert_eq!(out[0].priority, Priority::High);
    }

    #[test]
    fn test_keyword_gap_splits_on_non_ascii_letters() {
        assert_eq!(missing_keywords("", "Zürich office"), vec!["rich", "office"]);
        assert_eq!(missing_keywords("Zurich", "Zürich office"), vec!["rich", "office"]);
    }

    #[test]
    fn test_generate_is_total_on_empty_input() {
        let empty = SkillSet::new();
        let report = gaps(&empty, &empty);
        let ctx = InsightContext {
            resume_text: "",
            job_text: "",
            skill_gaps: &report,
        };
        let out = generate_suggestions(&ctx);
        let types: Vec<SuggestionType> = out.iter().map(|s| s.suggestion_type).collect();
        assert_eq!(
            types,
            vec![SuggestionType::Content, SuggestionType::Content, SuggestionType::Format]
        );
    }

    #[test]
    fn test_serializes_type_field() {
        let suggestion = Suggestion {
            suggestion_type: SuggestionType::Format,
            suggestion: "x".to_string(),
            impact: Impact::Low,
            priority: Priority::Low,
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "Format");
    }
}
