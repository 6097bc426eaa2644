//! Taxonomy-driven skill extraction

use crate::config::MatchMode;
use crate::error::{Result, ResumeMatcherError};
use crate::processing::taxonomy::{self, SkillCategory, SkillSet};
use aho_corasick::AhoCorasick;
use std::collections::{HashMap, HashSet};

/// Finds catalog skills (and their aliases) in free text.
///
/// Every canonical skill and alias is lower-cased, deduplicated, and compiled
/// into a single automaton. A pattern can stand for several catalog entries
/// (e.g. "agile" is both a soft skill and a methodology), so each pattern
/// keeps the list of entries it resolves to.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    targets: Vec<Vec<(SkillCategory, usize)>>,
    mode: MatchMode,
}

impl SkillExtractor {
    pub fn new(mode: MatchMode) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut targets: Vec<Vec<(SkillCategory, usize)>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for category in SkillCategory::ALL {
            for (skill_idx, skill) in category.skills().iter().enumerate() {
                let spellings = std::iter::once(skill.to_lowercase())
                    .chain(taxonomy::aliases(skill).iter().map(|a| a.to_string()));

                for spelling in spellings {
                    let pattern_id = *index.entry(spelling.clone()).or_insert_with(|| {
                        patterns.push(spelling);
                        targets.push(Vec::new());
                        patterns.len() - 1
                    });
                    targets[pattern_id].push((category, skill_idx));
                }
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            matcher,
            targets,
            mode,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Extract skills by category. Skills keep catalog order and only
    /// categories with a hit appear in the result.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        let lower = text.to_lowercase();
        let mut found: HashSet<(SkillCategory, usize)> = HashSet::new();

        for mat in self.matcher.find_overlapping_iter(&lower) {
            if self.mode == MatchMode::WordBoundary && !is_bounded(&lower, mat.start(), mat.end()) {
                continue;
            }
            found.extend(self.targets[mat.pattern().as_usize()].iter().copied());
        }

        let mut skills = SkillSet::new();
        for category in SkillCategory::ALL {
            let in_category: Vec<String> = category
                .skills()
                .iter()
                .enumerate()
                .filter(|(idx, _)| found.contains(&(category, *idx)))
                .map(|(_, skill)| skill.to_string())
                .collect();

            if !in_category.is_empty() {
                skills.insert(category, in_category);
            }
        }

        skills
    }
}

/// True when the match is not glued to an alphanumeric character on either side.
fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substring() -> SkillExtractor {
        SkillExtractor::new(MatchMode::Substring).unwrap()
    }

    #[test]
    fn test_extracts_by_category_in_catalog_order() {
        let skills = substring().extract_skills("Python and React developer, strong Leadership");

        assert_eq!(
            skills.get(&SkillCategory::TechnicalSkills),
            Some(&vec!["React".to_string(), "Python".to_string()])
        );
        assert_eq!(
            skills.get(&SkillCategory::SoftSkills),
            Some(&vec!["Leadership".to_string()])
        );
        assert!(!skills.contains_key(&SkillCategory::ToolsAndPlatforms));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(substring().extract_skills("").is_empty());
    }

    #[test]
    fn test_aliases() {
        let skills = substring().extract_skills("Worked with postgres and some ML pipelines");
        let tech = skills.get(&SkillCategory::TechnicalSkills).unwrap();
        assert!(tech.contains(&"PostgreSQL".to_string()));
        assert!(tech.contains(&"Machine Learning".to_string()));
    }

    #[test]
    fn test_shared_pattern_lands_in_both_categories() {
        let skills = substring().extract_skills("We run Agile teams");
        assert!(skills[&SkillCategory::SoftSkills].contains(&"Agile".to_string()));
        assert!(skills[&SkillCategory::Methodologies].contains(&"Agile".to_string()));
    }

    #[test]
    fn test_substring_mode_keeps_loose_matches() {
        // "ts" inside "results" counts as TypeScript, "java" inside "javascript" as Java
        let skills = substring().extract_skills("Delivered results with JavaScript");
        let tech = &skills[&SkillCategory::TechnicalSkills];
        assert!(tech.contains(&"TypeScript".to_string()));
        assert!(tech.contains(&"Java".to_string()));
        assert!(tech.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_word_boundary_mode_drops_embedded_matches() {
        let extractor = SkillExtractor::new(MatchMode::WordBoundary).unwrap();
        let skills = extractor.extract_skills("Delivered results with JavaScript and C++.");
        let tech = &skills[&SkillCategory::TechnicalSkills];
        assert!(tech.contains(&"JavaScript".to_string()));
        assert!(tech.contains(&"C++".to_string()));
        assert!(!tech.contains(&"TypeScript".to_string()));
        assert!(!tech.contains(&"Java".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let skills = substring().extract_skills("DOCKER, kubernetes, GitHub");
        assert!(skills[&SkillCategory::TechnicalSkills].contains(&"Docker".to_string()));
        assert!(skills[&SkillCategory::TechnicalSkills].contains(&"Kubernetes".to_string()));
        assert!(skills[&SkillCategory::ToolsAndPlatforms].contains(&"GitHub".to_string()));
    }
}
