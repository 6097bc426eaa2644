//! Resume matcher: resume and job description matching tool

use clap::Parser;
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{NoiseMode, OutputFormat};
use resume_matcher::input::{sample_resume_text, InputManager};
use resume_matcher::output::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_matcher::processing::taxonomy::{aliases, SkillCategory};
use resume_matcher::{AnalysisEngine, Config, Result, ResumeMatcherError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            sample_resume,
            job,
            job_text,
            output,
            detailed,
            save,
            seed,
            deterministic,
            match_mode,
        } => {
            info!("Starting resume match analysis");

            // Command-line flags override the config file
            if let Some(seed) = seed {
                config.similarity.noise = NoiseMode::Seeded { seed };
            }
            if deterministic {
                config.similarity.noise = NoiseMode::Neutral;
            }
            if let Some(mode) = match_mode {
                config.matching.mode = cli::parse_match_mode(&mode).map_err(ResumeMatcherError::InvalidInput)?;
            }
            if detailed {
                config.output.detailed = true;
            }
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let mut input_manager = InputManager::from_config(&config.input);

            let (resume_text, resume_name) = match (resume, sample_resume) {
                (Some(path), _) => {
                    let text = input_manager.extract_text(&path).await?;
                    (text, path.to_string_lossy().to_string())
                }
                (None, true) => (sample_resume_text().to_string(), "sample_resume".to_string()),
                (None, false) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Either --resume or --sample-resume is required".to_string(),
                    ));
                }
            };

            let job_text = match (job, job_text) {
                (Some(path), _) => input_manager.extract_text(&path).await?,
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Either --job or --job-text is required".to_string(),
                    ));
                }
            };

            if resume_text.trim().is_empty() {
                warn!("Resume text is empty; scores will reflect the job description only");
            }
            if job_text.trim().is_empty() {
                warn!("Job description is empty; no skills will be required");
            }

            let mut engine = AnalysisEngine::new(&config)?;
            let result = engine.analyze(&resume_text, &job_text);

            let generator = ReportGenerator::from_config(&config.output);
            println!("{}", generator.generate_report(&result, output_format)?);

            if let Some(save_path) = save {
                let target = resolve_save_path(save_path, output_format, &resume_name);

                // Files never get ANSI color codes
                let content = ReportGenerator::with_options(
                    false,
                    config.output.detailed,
                    config.output.pretty_json,
                    true,
                )
                .generate_report(&result, output_format)?;

                save_report_to_file(&content, &target)?;
                info!("Report saved to {}", target.display());
            }
        }

        Commands::Skills { category } => {
            let categories = match category {
                Some(name) => vec![SkillCategory::from_name(&name)
                    .ok_or_else(|| ResumeMatcherError::InvalidInput(format!("Unknown skill category: {}", name)))?],
                None => SkillCategory::ALL.to_vec(),
            };

            for category in categories {
                println!("📚 {} ({})", category, category.skills().len());
                for skill in category.skills() {
                    let extra = aliases(skill);
                    if extra.is_empty() {
                        println!("  • {}", skill);
                    } else {
                        println!("  • {} (also: {})", skill, extra.join(", "));
                    }
                }
                println!();
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to render config: {}", e)))?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn resolve_save_path(path: PathBuf, format: OutputFormat, resume_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, resume_name, true))
    } else {
        path
    }
}
