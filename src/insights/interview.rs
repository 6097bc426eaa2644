//! Interview question library

use crate::insights::{Difficulty, InsightContext};
use crate::processing::taxonomy::SkillCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Leadership,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Culture Fit")]
    CultureFit,
    #[serde(rename = "Career Goals")]
    CareerGoals,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Behavioral => "Behavioral",
            QuestionCategory::Leadership => "Leadership",
            QuestionCategory::ProblemSolving => "Problem Solving",
            QuestionCategory::CultureFit => "Culture Fit",
            QuestionCategory::CareerGoals => "Career Goals",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub category: QuestionCategory,
    pub question: String,
    pub rationale: String,
    pub difficulty: Difficulty,
}

/// When a library question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Job text contains any of these, case-insensitively
    JobMentions(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub category: QuestionCategory,
    pub question: &'static str,
    pub rationale: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRule {
    Library(Gate, QuestionTemplate),
    /// Probes the first technical skill both documents share
    SkillDeepDive,
}

const fn ask(
    gate: Gate,
    category: QuestionCategory,
    question: &'static str,
    rationale: &'static str,
    difficulty: Difficulty,
) -> QuestionRule {
    QuestionRule::Library(
        gate,
        QuestionTemplate {
            category,
            question,
            rationale,
            difficulty,
        },
    )
}

pub const QUESTION_RULES: &[QuestionRule] = &[
    ask(
        Gate::JobMentions(&["react"]),
        QuestionCategory::Technical,
        "Can you walk me through how you would optimize the performance of a React application?",
        "This question assesses your deep understanding of React performance optimization, which is crucial for building scalable applications.",
        Difficulty::Medium,
    ),
    ask(
        Gate::JobMentions(&["api"]),
        QuestionCategory::Technical,
        "How would you design a RESTful API for a large-scale application? What considerations would you make?",
        "This evaluates your API design skills and understanding of scalability principles.",
        Difficulty::Hard,
    ),
    ask(
        Gate::JobMentions(&["python"]),
        QuestionCategory::Technical,
        "How do you structure a Python codebase so it stays testable and maintainable as it grows?",
        "This checks whether your Python experience extends beyond scripting to production-quality code organization.",
        Difficulty::Medium,
    ),
    ask(
        Gate::JobMentions(&["docker", "kubernetes"]),
        QuestionCategory::Technical,
        "How would you containerize a service and roll out a new version without downtime?",
        "This evaluates your hands-on experience with containers, orchestration and safe deployment practices.",
        Difficulty::Medium,
    ),
    ask(
        Gate::JobMentions(&["sql", "database"]),
        QuestionCategory::Technical,
        "How would you design the schema and indexes for a table that receives millions of writes per day?",
        "This assesses your data modeling skills and your understanding of query performance trade-offs.",
        Difficulty::Medium,
    ),
    ask(
        Gate::JobMentions(&["aws", "azure", "gcp", "cloud"]),
        QuestionCategory::Technical,
        "Describe how you would architect a highly available application in the cloud. How would you control its costs?",
        "This evaluates your cloud architecture knowledge and your ability to balance reliability against cost.",
        Difficulty::Hard,
    ),
    QuestionRule::SkillDeepDive,
    ask(
        Gate::Always,
        QuestionCategory::Behavioral,
        "Tell me about a time when you had to work with a difficult team member. How did you handle the situation?",
        "This assesses your interpersonal skills and ability to handle workplace conflicts professionally.",
        Difficulty::Medium,
    ),
    ask(
        Gate::Always,
        QuestionCategory::Behavioral,
        "Describe a project where you had to learn a new technology quickly. How did you approach it?",
        "This evaluates your learning agility and adaptability, which are crucial in fast-moving tech environments.",
        Difficulty::Easy,
    ),
    ask(
        Gate::JobMentions(&["senior", "lead"]),
        QuestionCategory::Leadership,
        "How do you approach mentoring junior developers and helping them grow in their careers?",
        "This question assesses your leadership skills and ability to develop team members.",
        Difficulty::Medium,
    ),
    ask(
        Gate::Always,
        QuestionCategory::ProblemSolving,
        "Walk me through your approach to debugging a complex issue in a production system.",
        "This evaluates your systematic problem-solving skills and experience with production systems.",
        Difficulty::Hard,
    ),
    ask(
        Gate::Always,
        QuestionCategory::CultureFit,
        "What motivates you in your work, and how do you stay engaged during challenging projects?",
        "This helps assess whether your motivations align with the company culture and work environment.",
        Difficulty::Easy,
    ),
    ask(
        Gate::Always,
        QuestionCategory::CareerGoals,
        "Where do you see yourself professionally in the next 3-5 years?",
        "This question helps understand your long-term goals and whether they align with the growth opportunities available.",
        Difficulty::Easy,
    ),
];

impl Gate {
    pub fn is_open(&self, job_text_lower: &str) -> bool {
        match self {
            Gate::Always => true,
            Gate::JobMentions(terms) => terms.iter().any(|term| job_text_lower.contains(*term)),
        }
    }
}

impl QuestionRule {
    pub fn apply(&self, ctx: &InsightContext<'_>) -> Option<InterviewQuestion> {
        match self {
            QuestionRule::Library(gate, template) => {
                if !gate.is_open(&ctx.job_text.to_lowercase()) {
                    return None;
                }
                Some(InterviewQuestion {
                    category: template.category,
                    question: template.question.to_string(),
                    rationale: template.rationale.to_string(),
                    difficulty: template.difficulty,
                })
            }
            QuestionRule::SkillDeepDive => {
                let skill = ctx
                    .skill_gaps
                    .matching_skills
                    .get(&SkillCategory::TechnicalSkills)
                    .and_then(|skills| skills.first())?;

                Some(InterviewQuestion {
                    category: QuestionCategory::Technical,
                    question: format!(
                        "Your resume lists {}. Walk me through the most complex problem you solved with it and the trade-offs you made.",
                        skill
                    ),
                    rationale: "Experience Deep Dive: interviewers probe the overlap between your resume and their stack to verify depth, not just familiarity.".to_string(),
                    difficulty: Difficulty::Medium,
                })
            }
        }
    }
}

pub fn generate_interview_questions(ctx: &InsightContext<'_>) -> Vec<InterviewQuestion> {
    QUESTION_RULES.iter().filter_map(|rule| rule.apply(ctx)).collect()
}
