//! Output formatters: colored console, JSON and Markdown renderings of an
//! analysis result

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::insights::{Impact, Priority};
use crate::processing::analyzer::AnalysisResult;
use crate::processing::match_scorer::MatchLevel;
use crate::processing::taxonomy::SkillSet;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and emoji section headers
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter; the JSON form is the wire format for other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn level_color(level: MatchLevel) -> Color {
    match level {
        MatchLevel::Excellent => Color::Green,
        MatchLevel::Good => Color::Blue,
        MatchLevel::Fair => Color::Yellow,
        MatchLevel::Poor => Color::Red,
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn skills_line(skills: &SkillSet) -> Vec<String> {
    skills
        .iter()
        .map(|(category, list)| format!("{}: {}", category, list.join(", ")))
        .collect()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, level: MatchLevel) -> String {
        let badge = level.to_string().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(level_color(level)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match (self.use_colors, priority) {
            (true, Priority::High) => "⚠️ ",
            (true, Priority::Medium) => "📋 ",
            (true, Priority::Low) => "💡 ",
            (false, Priority::High) => "[*] ",
            (false, Priority::Medium) => "[-] ",
            (false, Priority::Low) => "[+] ",
        }
    }

    fn format_detailed(&self, result: &AnalysisResult, output: &mut String) {
        let analysis = &result.match_analysis;

        output.push_str(&self.format_header("📊 Detailed Analysis", 2));

        output.push_str(&self.format_header("Coverage by Category", 3));
        for (category, coverage) in &analysis.skill_gaps.skill_coverage {
            output.push_str(&format!("  • {}: {}\n", category, percent(*coverage)));
        }

        if !analysis.resume_key_phrases.is_empty() {
            output.push_str(&self.format_header("Resume Key Phrases", 3));
            for phrase in &analysis.resume_key_phrases {
                output.push_str(&format!(
                    "  • {} {}\n",
                    phrase.phrase,
                    self.colorize(&format!("({:?}, {:.2})", phrase.category, phrase.score), Color::BrightBlack)
                ));
            }
        }

        let quality = &analysis.text_quality_analysis;
        output.push_str(&self.format_header("Text Quality", 3));
        output.push_str(&format!("  Quality score: {}\n", percent(quality.quality_score)));
        output.push_str(&format!(
            "  Words: {} | Sentences: {} | Avg sentence length: {:.1}\n",
            quality.word_count, quality.sentence_count, quality.avg_sentence_length
        ));
        output.push_str(&format!(
            "  Quantified achievements: {} | Action verbs: {}\n",
            if quality.has_quantifiable_achievements { "yes" } else { "no" },
            if quality.has_action_verbs { "yes" } else { "no" }
        ));

        output.push_str(&self.format_header("Interview Questions", 3));
        for (i, question) in result.interview_questions.iter().enumerate() {
            output.push_str(&format!(
                "{}. [{} | {}] {}\n",
                i + 1,
                question.category,
                question.difficulty,
                question.question
            ));
            output.push_str(&format!("   {}\n", self.colorize(&question.rationale, Color::BrightBlack)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        let analysis = &result.match_analysis;
        let metrics = &analysis.similarity_metrics;
        let gaps = &analysis.skill_gaps;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            result.analysis_metadata.timestamp, result.analysis_metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Summary", 2));
        output.push_str(&format!(
            "Match Score: {} {}\n",
            self.colorize(&format!("{}%", analysis.match_score), level_color(analysis.match_level)),
            self.format_score_badge(analysis.match_level)
        ));
        output.push_str(&format!(
            "Skill Coverage: {} ({}/{} required skills)\n",
            percent(gaps.overall_skill_coverage),
            gaps.total_skills_matched,
            gaps.total_skills_required
        ));

        output.push_str(&self.format_header("Similarity Breakdown", 3));
        output.push_str(&format!("🎯 Semantic: {}\n", percent(metrics.semantic_similarity)));
        output.push_str(&format!("🔍 Keyword Overlap: {}\n", percent(metrics.keyword_overlap)));
        output.push_str(&format!("📐 TF-IDF: {}\n", percent(metrics.tfidf_similarity)));
        output.push_str(&format!("Overall: {}\n", percent(metrics.overall_similarity)));

        if !gaps.matching_skills.is_empty() {
            output.push_str(&self.format_header("✅ Matching Skills", 3));
            for line in skills_line(&gaps.matching_skills) {
                output.push_str(&format!("  • {}\n", self.colorize(&line, Color::Green)));
            }
        }

        if !gaps.missing_skills.is_empty() {
            output.push_str(&self.format_header("🎯 Missing Skills", 3));
            for line in skills_line(&gaps.missing_skills) {
                output.push_str(&format!("  • {}\n", self.colorize(&line, Color::Yellow)));
            }
        }

        if !result.improvement_suggestions.is_empty() {
            output.push_str(&self.format_header("📋 Suggestions", 2));
            for (i, suggestion) in result.improvement_suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}{} {}\n",
                    i + 1,
                    self.format_priority_icon(suggestion.priority),
                    suggestion.suggestion,
                    self.colorize(&format!("({:?}, impact {})", suggestion.suggestion_type, suggestion.impact), Color::BrightBlack)
                ));
            }
        }

        let actions = &result.actionable_recommendations;
        output.push_str(&self.format_header("🚀 Action Plan", 2));
        output.push_str(&self.colorize("Immediate actions:\n", Color::Green));
        for (i, action) in actions.immediate_actions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, action));
        }
        if !actions.skill_development.is_empty() {
            output.push_str(&self.colorize("Skill development:\n", Color::Green));
            for (i, action) in actions.skill_development.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, action));
            }
        }
        if self.detailed {
            output.push_str(&self.colorize("Resume optimization:\n", Color::Green));
            for (i, tip) in actions.resume_optimization.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, tip));
            }
            output.push_str(&self.colorize("Interview preparation:\n", Color::Green));
            for (i, tip) in actions.interview_preparation.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, tip));
            }

            self.format_detailed(result, &mut output);
        }

        output.push_str(&format!(
            "\n{} Generated by resume-matcher v{} | {} skills identified\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION"),
            result.analysis_metadata.total_skills_identified
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(level: MatchLevel) -> &'static str {
        match level {
            MatchLevel::Excellent => "🟢 Excellent",
            MatchLevel::Good => "🔵 Good",
            MatchLevel::Fair => "🟠 Fair",
            MatchLevel::Poor => "🔴 Poor",
        }
    }

    fn impact_label(impact: Impact) -> &'static str {
        match impact {
            Impact::High => "High impact",
            Impact::Medium => "Medium impact",
            Impact::Low => "Low impact",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        let analysis = &result.match_analysis;
        let metrics = &analysis.similarity_metrics;
        let gaps = &analysis.skill_gaps;
        let mut output = String::new();

        output.push_str("# 📊 Resume Match Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n\n",
                result.analysis_metadata.timestamp, result.analysis_metadata.processing_time_ms
            ));
        }

        output.push_str("## Match Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            analysis.match_score,
            Self::markdown_score_badge(analysis.match_level)
        ));
        output.push_str(&format!(
            "**Skill Coverage:** {} ({}/{} required skills)\n\n",
            percent(gaps.overall_skill_coverage),
            gaps.total_skills_matched,
            gaps.total_skills_required
        ));

        output.push_str("### Similarity Breakdown\n\n");
        output.push_str("| Metric | Score |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| 🎯 Semantic | {} |\n", percent(metrics.semantic_similarity)));
        output.push_str(&format!("| 🔍 Keyword Overlap | {} |\n", percent(metrics.keyword_overlap)));
        output.push_str(&format!("| 📐 TF-IDF | {} |\n", percent(metrics.tfidf_similarity)));
        output.push_str(&format!("| Overall | {} |\n\n", percent(metrics.overall_similarity)));

        if !gaps.skill_coverage.is_empty() {
            output.push_str("### Skills by Category\n\n");
            output.push_str("| Category | Coverage | Missing |\n");
            output.push_str("|----------|----------|---------|\n");
            for (category, coverage) in &gaps.skill_coverage {
                let missing = gaps
                    .missing_skills
                    .get(category)
                    .map(|skills| skills.join(", "))
                    .unwrap_or_default();
                output.push_str(&format!("| {} | {} | {} |\n", category, percent(*coverage), missing));
            }
            output.push('\n');
        }

        if !result.improvement_suggestions.is_empty() {
            output.push_str("## 📋 Suggestions\n\n");
            for suggestion in &result.improvement_suggestions {
                output.push_str(&format!(
                    "- **{:?}** ({}, {} priority): {}\n",
                    suggestion.suggestion_type,
                    Self::impact_label(suggestion.impact),
                    suggestion.priority,
                    suggestion.suggestion
                ));
            }
            output.push('\n');
        }

        output.push_str("## 🎤 Interview Questions\n\n");
        for (i, question) in result.interview_questions.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}** ({}): {}\n   > {}\n",
                i + 1,
                question.category,
                question.difficulty,
                question.question,
                question.rationale
            ));
        }
        output.push('\n');

        let actions = &result.actionable_recommendations;
        output.push_str("## 🚀 Action Plan\n\n");
        let groups = [
            ("Immediate Actions", &actions.immediate_actions),
            ("Skill Development", &actions.skill_development),
            ("Resume Optimization", &actions.resume_optimization),
            ("Interview Preparation", &actions.interview_preparation),
        ];
        for (title, items) in groups {
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n\n", title));
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by resume-matcher v{} ({}, {} skills identified)*\n",
                env!("CARGO_PKG_VERSION"),
                result.analysis_metadata.processing_method,
                result.analysis_metadata.total_skills_identified
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json, true)
    }

    pub fn generate_report(&self, result: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(result),
            OutputFormat::Json => self.json_formatter.format_report(result),
            OutputFormat::Markdown => self.markdown_formatter.format_report(result),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name).file_stem().unwrap_or_default().to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
