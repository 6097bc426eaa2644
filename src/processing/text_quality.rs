//! Structural and content heuristics for resume text

use crate::processing::text_processor::{round_to, sentence_count, word_count};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUANTIFIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9]+%|[0-9]+\+|\$[0-9]+|increased|decreased|improved|reduced")
        .expect("Invalid achievement regex")
});

const ACTION_VERBS: &[&str] = &[
    "achieved", "created", "developed", "managed", "led", "implemented", "designed", "built", "optimized",
    "improved",
];

const LONG_RESUME_WORDS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQualityReport {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub has_quantifiable_achievements: bool,
    pub has_action_verbs: bool,
    pub quality_score: f64,
}

pub fn has_quantifiable_achievements(text: &str) -> bool {
    QUANTIFIABLE.is_match(text)
}

pub fn has_action_verbs(text: &str) -> bool {
    let lower = text.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}

pub fn analyze_text_quality(text: &str) -> TextQualityReport {
    let words = word_count(text);
    let sentences = sentence_count(text);
    let achievements = has_quantifiable_achievements(text);
    let action_verbs = has_action_verbs(text);

    let avg_sentence_length = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };

    let mut score: f64 = 0.5;
    if achievements {
        score += 0.2;
    }
    if action_verbs {
        score += 0.2;
    }
    if words > LONG_RESUME_WORDS {
        score += 0.1;
    }
    if avg_sentence_length > 10.0 && avg_sentence_length < 25.0 {
        score += 0.1;
    }

    TextQualityReport {
        word_count: words,
        character_count: text.chars().count(),
        sentence_count: sentences,
        avg_sentence_length: round_to(avg_sentence_length, 1),
        has_quantifiable_achievements: achievements,
        has_action_verbs: action_verbs,
        quality_score: round_to(score, 3).min(1.0),
    }
}
