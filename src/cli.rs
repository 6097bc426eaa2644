//! CLI interface for the resume matcher

use crate::config::{MatchMode, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Resume and job description matching tool")]
#[command(
    long_about = "Compare a resume with a job description: skill gaps, match score, improvement suggestions, interview questions and an action plan"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long, required_unless_present = "sample_resume", conflicts_with = "sample_resume")]
        resume: Option<PathBuf>,

        /// Use the bundled sample resume instead of a file
        #[arg(long)]
        sample_resume: bool,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed the similarity noise for reproducible scores
        #[arg(long, conflicts_with = "deterministic")]
        seed: Option<u64>,

        /// Disable similarity noise entirely
        #[arg(long)]
        deterministic: bool,

        /// Skill matching mode: substring, word-boundary
        #[arg(long)]
        match_mode: Option<String>,
    },

    /// List the skill taxonomy
    Skills {
        /// Only show one category (e.g. "technical", "tools")
        #[arg(long)]
        category: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

pub fn parse_match_mode(mode: &str) -> Result<MatchMode, String> {
    match mode.to_lowercase().as_str() {
        "substring" => Ok(MatchMode::Substring),
        "word-boundary" | "word" => Ok(MatchMode::WordBoundary),
        _ => Err(format!("Invalid match mode: {}. Supported: substring, word-boundary", mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_parse_match_mode() {
        assert_eq!(parse_match_mode("word-boundary"), Ok(MatchMode::WordBoundary));
        assert_eq!(parse_match_mode("Substring"), Ok(MatchMode::Substring));
        assert!(parse_match_mode("fuzzy").is_err());
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "analyze",
            "--sample-resume",
            "--job-text",
            "Rust engineer",
            "--seed",
            "7",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                sample_resume,
                resume,
                job_text,
                seed,
                ..
            } => {
                assert!(sample_resume);
                assert!(resume.is_none());
                assert_eq!(job_text.as_deref(), Some("Rust engineer"));
                assert_eq!(seed, Some(7));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_inputs() {
        assert!(Cli::try_parse_from(["resume-matcher", "analyze", "--job-text", "x"]).is_err());
        assert!(Cli::try_parse_from(["resume-matcher", "analyze", "--sample-resume"]).is_err());
        assert!(Cli::try_parse_from([
            "resume-matcher",
            "analyze",
            "--sample-resume",
            "--job-text",
            "x",
            "--seed",
            "1",
            "--deterministic",
        ])
        .is_err());
    }
}
