//! Per-category comparison of resume skills against job requirements

use crate::processing::taxonomy::{SkillCategory, SkillSet};
use crate::processing::text_processor::round_to;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Missing skills reported per priority category
const PRIORITY_GAP_LIMIT: usize = 3;
const STRENGTH_COVERAGE: f64 = 0.7;
const PRIORITY_MISSING_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub skill_coverage: BTreeMap<SkillCategory, f64>,
    pub priority_gaps: SkillSet,
    pub strength_areas: SkillSet,
    pub total_skills_required: usize,
    pub total_skills_matched: usize,
    pub overall_skill_coverage: f64,
}

/// Compare skills category by category.
///
/// Only categories the job asks for are considered; resume-only categories
/// carry no requirement and are left out of every map.
pub fn analyze_skill_gaps(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillGapReport {
    let mut report = SkillGapReport {
        matching_skills: SkillSet::new(),
        missing_skills: SkillSet::new(),
        skill_coverage: BTreeMap::new(),
        priority_gaps: SkillSet::new(),
        strength_areas: SkillSet::new(),
        total_skills_required: 0,
        total_skills_matched: 0,
        overall_skill_coverage: 1.0,
    };

    for (&category, required) in job_skills {
        let held: Vec<String> = resume_skills
            .get(&category)
            .map(|skills| skills.iter().map(|s| s.to_lowercase()).collect())
            .unwrap_or_default();

        let (matched, missing): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|skill| held.contains(&skill.to_lowercase()));

        let coverage = if required.is_empty() {
            1.0
        } else {
            matched.len() as f64 / required.len() as f64
        };

        if !missing.is_empty() {
            let missing_fraction = missing.len() as f64 / required.len() as f64;
            if category == SkillCategory::TechnicalSkills || missing_fraction > PRIORITY_MISSING_FRACTION {
                report
                    .priority_gaps
                    .insert(category, missing.iter().take(PRIORITY_GAP_LIMIT).cloned().collect());
            }
            report.missing_skills.insert(category, missing);
        }

        if coverage > STRENGTH_COVERAGE && !matched.is_empty() {
            report.strength_areas.insert(category, matched.clone());
        }

        report.skill_coverage.insert(category, round_to(coverage, 3));
        report.total_skills_required += required.len();
        report.total_skills_matched += matched.len();

        if !matched.is_empty() {
            report.matching_skills.insert(category, matched);
        }
    }

    if report.total_skills_required > 0 {
        let overall = report.total_skills_matched as f64 / report.total_skills_required as f64;
        report.overall_skill_coverage = round_to(overall, 3);
    }

    report
}
