//! Fixed skill catalog grouped by category

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Skill category. Ordering follows the taxonomy, so maps keyed by category
/// iterate in the same order the catalog is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Technical Skills")]
    TechnicalSkills,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    #[serde(rename = "Methodologies")]
    Methodologies,
    #[serde(rename = "Tools & Platforms")]
    ToolsAndPlatforms,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::TechnicalSkills,
        SkillCategory::SoftSkills,
        SkillCategory::Methodologies,
        SkillCategory::ToolsAndPlatforms,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::TechnicalSkills => "Technical Skills",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::Methodologies => "Methodologies",
            SkillCategory::ToolsAndPlatforms => "Tools & Platforms",
        }
    }

    /// Parse a category from its display name or a loose short form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "technical skills" | "technical" | "tech" => Some(SkillCategory::TechnicalSkills),
            "soft skills" | "soft" => Some(SkillCategory::SoftSkills),
            "methodologies" | "methodology" => Some(SkillCategory::Methodologies),
            "tools & platforms" | "tools" | "platforms" => Some(SkillCategory::ToolsAndPlatforms),
            _ => None,
        }
    }

    /// Canonical skills for this category, in catalog order.
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::TechnicalSkills => TECHNICAL_SKILLS,
            SkillCategory::SoftSkills => SOFT_SKILLS,
            SkillCategory::Methodologies => METHODOLOGIES,
            SkillCategory::ToolsAndPlatforms => TOOLS_AND_PLATFORMS,
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skills found in a text, by category. Only categories with at least one
/// match are present.
pub type SkillSet = BTreeMap<SkillCategory, Vec<String>>;

const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Node.js", "Python", "Java", "C++", "HTML", "CSS",
    "Angular", "Vue.js", "Flask", "Django", "Express", "Spring Boot", "Git", "Docker",
    "Kubernetes", "AWS", "Azure", "GCP", "PostgreSQL", "MongoDB", "MySQL", "Redis",
    "Jenkins", "CI/CD", "GraphQL", "REST API", "Microservices", "Machine Learning",
    "TensorFlow", "PyTorch", "Pandas", "NumPy", "Sklearn",
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Team Management", "Project Management", "Problem Solving",
    "Critical Thinking", "Collaboration", "Mentoring", "Agile", "Scrum", "Cross-functional",
    "Strategic Planning", "Time Management", "Adaptability", "Innovation",
];

const METHODOLOGIES: &[&str] = &[
    "Agile", "Scrum", "DevOps", "Test-Driven Development", "Object-Oriented Programming",
    "Functional Programming", "Design Patterns", "Clean Code", "Code Review",
    "Continuous Integration", "Continuous Deployment",
];

const TOOLS_AND_PLATFORMS: &[&str] = &[
    "GitHub", "GitLab", "Jira", "Confluence", "Slack", "Trello", "Figma", "Postman",
    "Visual Studio Code", "IntelliJ", "Eclipse", "Linux", "Windows", "macOS",
];

/// Extra lower-case spellings that also count as a canonical skill.
pub fn aliases(skill: &str) -> &'static [&'static str] {
    match skill {
        "JavaScript" => &["js"],
        "TypeScript" => &["ts"],
        "PostgreSQL" => &["postgres", "psql"],
        "Machine Learning" => &["ml"],
        _ => &[],
    }
}

/// Total number of (category, skill) entries in the catalog.
pub fn skill_count() -> usize {
    SkillCategory::ALL.iter().map(|c| c.skills().len()).sum()
}
