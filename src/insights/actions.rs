//! Actionable recommendations grouped by horizon

use crate::insights::InsightContext;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static METRIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+%|\$[0-9]+|[0-9]+\+").expect("Invalid metric regex"));

const RESUME_TIPS: [&str; 4] = [
    "Reorganize your experience section to highlight the most relevant roles first",
    "Add a \"Key Achievements\" section to showcase your most impressive accomplishments",
    "Include relevant keywords naturally throughout your resume content",
    "Ensure your LinkedIn profile matches and complements your resume",
];

const INTERVIEW_TIPS: [&str; 4] = [
    "Prepare STAR (Situation, Task, Action, Result) stories for your major accomplishments",
    "Research the company's recent projects, values, and challenges",
    "Practice explaining technical concepts in simple terms for non-technical interviewers",
    "Prepare thoughtful questions about the role, team dynamics, and growth opportunities",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionableRecommendations {
    pub immediate_actions: Vec<String>,
    pub skill_development: Vec<String>,
    pub resume_optimization: Vec<String>,
    pub interview_preparation: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRule {
    AddMetrics,
    TailorSummary,
    ActionVerbs,
    LearnPriorityGaps,
    ResumeTips,
    InterviewTips,
}

impl ActionRule {
    pub const ALL: [ActionRule; 6] = [
        ActionRule::AddMetrics,
        ActionRule::TailorSummary,
        ActionRule::ActionVerbs,
        ActionRule::LearnPriorityGaps,
        ActionRule::ResumeTips,
        ActionRule::InterviewTips,
    ];

    pub fn apply(&self, ctx: &InsightContext<'_>, out: &mut ActionableRecommendations) {
        match self {
            ActionRule::AddMetrics => {
                if !METRIC.is_match(ctx.resume_text) {
                    out.immediate_actions
                        .push("Add specific metrics and quantifiable achievements to demonstrate your impact".to_string());
                }
            }
            ActionRule::TailorSummary => out.immediate_actions.push(
                "Tailor your resume summary to directly address the key requirements mentioned in the job description"
                    .to_string(),
            ),
            ActionRule::ActionVerbs => out.immediate_actions.push(
                "Use strong action verbs to start each bullet point (e.g., \"Implemented,\" \"Led,\" \"Optimized\")"
                    .to_string(),
            ),
            ActionRule::LearnPriorityGaps => {
                for skills in ctx.skill_gaps.priority_gaps.values() {
                    if let Some(first) = skills.first() {
                        out.skill_development
                            .push(format!("Focus on learning {} through online courses or hands-on projects", first));
                    }
                    if let Some(second) = skills.get(1) {
                        out.skill_development.push(format!(
                            "Build a portfolio project showcasing {} to demonstrate practical knowledge",
                            second
                        ));
                    }
                }
            }
            ActionRule::ResumeTips => out
                .resume_optimization
                .extend(RESUME_TIPS.iter().map(|tip| tip.to_string())),
            ActionRule::InterviewTips => out
                .interview_preparation
                .extend(INTERVIEW_TIPS.iter().map(|tip| tip.to_string())),
        }
    }
}

pub fn generate_actionable_recommendations(ctx: &InsightContext<'_>) -> ActionableRecommendations {
    let mut recommendations = ActionableRecommendations::default();
    for rule in ActionRule::ALL {
        rule.apply(ctx, &mut recommendations);
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_support::{gaps, skills};
    use crate::processing::taxonomy::{SkillCategory, SkillSet};

    #[test]
    fn test_metrics_check() {
        let empty = SkillSet::new();
        let report = gaps(&empty, &empty);
        let mut ctx = InsightContext {
            resume_text: "Wrote services",
            job_text: "",
            skill_gaps: &report,
        };

        let recs = generate_actionable_recommendations(&ctx);
        assert_eq!(recs.immediate_actions.len(), 3);
        assert!(recs.immediate_actions[0].starts_with("Add specific metrics"));

        ctx.resume_text = "Grew revenue by $300 per customer";
        let recs = generate_actionable_recommendations(&ctx);
        assert_eq!(recs.immediate_actions.len(), 2);
        assert!(recs.immediate_actions[0].starts_with("Tailor"));
    }

    #[test]
    fn test_skill_development_from_priority_gaps() {
        let resume = skills(vec![(SkillCategory::SoftSkills, vec!["Communication"])]);
        let job = skills(vec![
            (SkillCategory::TechnicalSkills, vec!["Python", "Docker"]),
            (SkillCategory::SoftSkills, vec!["Communication", "Leadership", "Mentoring"]),
            (SkillCategory::Methodologies, vec!["Scrum"]),
        ]);
        let report = gaps(&resume, &job);
        let ctx = InsightContext {
            resume_text: "",
            job_text: "",
            skill_gaps: &report,
        };

        let recs = generate_actionable_recommendations(&ctx);
        assert_eq!(
            recs.skill_development,
            vec![
                "Focus on learning Python through online courses or hands-on projects",
                "Build a portfolio project showcasing Docker to demonstrate practical knowledge",
                "Focus on learning Leadership through online courses or hands-on projects",
                "Build a portfolio project showcasing Mentoring to demonstrate practical knowledge",
                "Focus on learning Scrum through online courses or hands-on projects",
            ]
        );
        assert_eq!(recs.resume_optimization.len(), 4);
        assert_eq!(recs.interview_preparation.len(), 4);
    }
}
