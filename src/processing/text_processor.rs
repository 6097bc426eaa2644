//! Tokenization and sentence splitting shared by the analyzers

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid non-word regex"));

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));

static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[A-Za-z0-9_]{4,}(?-u:\b)").expect("Invalid keyword regex"));

/// Lower-cased word set used for overlap scoring. Tokens of two characters
/// or fewer are dropped.
pub fn similarity_tokens(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    NON_WORD
        .split(&lower)
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Raw segments between runs of `.`, `!` and `?`. Segments are not trimmed
/// and may be blank.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS.split(text).collect()
}

/// Number of sentences with non-whitespace content.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text)
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lower-cased words of four or more characters, in order of appearance
/// (duplicates kept).
pub fn keyword_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    KEYWORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_tokens() {
        let tokens = similarity_tokens("Rust, Go and C++ in a Node.js API!");

        assert!(tokens.contains("rust"));
        assert!(tokens.contains("and"));
        assert!(tokens.contains("node"));
        assert!(tokens.contains("api"));
        // two characters or fewer are dropped
        assert!(!tokens.contains("go"));
        assert!(!tokens.contains("js"));
        assert!(!tokens.contains("in"));
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(similarity_tokens("").is_empty());
        assert!(similarity_tokens("a b c ... !!").is_empty());
    }

    #[test]
    fn test_sentence_splitting() {
        let text = "First one. Second one!! Third?  ";
        assert_eq!(split_sentences(text), vec!["First one", " Second one", " Third", "  "]);
        assert_eq!(sentence_count(text), 3);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_keyword_tokens() {
        let tokens = keyword_tokens("Build APIs, build tools, ship it");
        assert_eq!(tokens, vec!["build", "apis", "build", "tools", "ship"]);
    }

    #[test]
    fn test_keyword_boundaries_are_ascii() {
        // non-ASCII letters break words
        assert_eq!(keyword_tokens("Zürich office"), vec!["rich", "office"]);
        assert_eq!(keyword_tokens("naïveté"), Vec::<String>::new());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one\ttwo\n three  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_truncate_and_round() {
        assert_eq!(truncate_chars("héllo world", 5), "héllo");
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(0.8999999999999999, 3), 0.9);
    }
}
