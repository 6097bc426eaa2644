//! Heuristic ranking of notable sentences

use crate::processing::text_processor::{round_to, split_sentences};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_KEY_PHRASES: usize = 8;
const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SENTENCE_CHARS: usize = 200;

static ACTION_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(developed|created|managed|led|implemented|designed|built|optimized)(?-u:\b)")
        .expect("Invalid action verb regex")
});

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("Invalid digit regex"));

static TECHNICAL_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(API|database|framework|algorithm|software|system)(?-u:\b)")
        .expect("Invalid technical term regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseCategory {
    General,
    Experience,
    Achievement,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPhrase {
    pub phrase: String,
    pub score: f64,
    pub category: PhraseCategory,
}

/// Raw score of one sentence, up to 1.2. Each rule adds to the score and,
/// when it fires, replaces the category, so the last matching rule names
/// the phrase.
fn score_sentence(sentence: &str) -> (f64, PhraseCategory) {
    let mut score: f64 = 0.5;
    let mut category = PhraseCategory::General;

    if ACTION_VERB.is_match(sentence) {
        score += 0.3;
        category = PhraseCategory::Experience;
    }
    if DIGIT.is_match(sentence) {
        score += 0.2;
        category = PhraseCategory::Achievement;
    }
    if TECHNICAL_TERM.is_match(sentence) {
        score += 0.2;
        category = PhraseCategory::Technical;
    }

    (round_to(score, 2), category)
}

/// Top sentences by raw score, best first. Ties keep their order in the
/// text. The reported score is capped at 1.0 after ranking.
pub fn extract_key_phrases(text: &str) -> Vec<KeyPhrase> {
    let mut ranked: Vec<(f64, KeyPhrase)> = split_sentences(text)
        .into_iter()
        .filter(|sentence| !sentence.trim().is_empty())
        .filter(|sentence| {
            let len = sentence.chars().count();
            len > MIN_SENTENCE_CHARS && len < MAX_SENTENCE_CHARS
        })
        .map(|sentence| {
            let (raw, category) = score_sentence(sentence);
            let phrase = KeyPhrase {
                phrase: sentence.trim().to_string(),
                score: raw.min(1.0),
                category,
            };
            (raw, phrase)
        })
        .collect();

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked.truncate(MAX_KEY_PHRASES);
    ranked.into_iter().map(|(_, phrase)| phrase).collect()
}
