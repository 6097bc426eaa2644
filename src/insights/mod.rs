//! Rule-driven advice: improvement suggestions, interview questions and
//! actionable recommendations.
//!
//! Every generator is a list of rules. A rule is an enum variant whose
//! `apply` checks its own condition against an [`InsightContext`] and renders
//! its template, so rules can be added or tested in isolation.

pub mod actions;
pub mod interview;
pub mod suggestions;

use crate::processing::skill_gaps::SkillGapReport;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use actions::{generate_actionable_recommendations, ActionRule, ActionableRecommendations};
pub use interview::{generate_interview_questions, InterviewQuestion, QuestionCategory, QuestionRule};
pub use suggestions::{generate_suggestions, Suggestion, SuggestionRule, SuggestionType};

/// Upstream results the rules are conditioned on.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub resume_text: &'a str,
    pub job_text: &'a str,
    pub skill_gaps: &'a SkillGapReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
