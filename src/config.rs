//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub similarity: SimilarityConfig,
    pub matching: MatchingConfig,
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    pub noise: NoiseMode,
}

/// Source of the perturbation draws used by the heuristic similarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum NoiseMode {
    /// Fresh entropy on every engine
    Random,
    /// Reproducible draws from a fixed seed
    Seeded { seed: u64 },
    /// No perturbation; every draw equals the base keyword overlap
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub mode: MatchMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Unanchored case-insensitive substring search
    Substring,
    /// Occurrence must not touch an alphanumeric character on either side
    WordBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub similarity_weight: f64,
    pub coverage_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_size_mb: u64,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity: SimilarityConfig {
                noise: NoiseMode::Random,
            },
            matching: MatchingConfig {
                mode: MatchMode::Substring,
            },
            scoring: ScoringConfig {
                similarity_weight: 0.5,
                coverage_weight: 0.5,
            },
            input: InputConfig {
                max_file_size_mb: 10,
                enable_cache: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first run.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Reject settings that would push the match score outside 0..=100 or
    /// break its monotonicity.
    pub fn validate(&self) -> Result<()> {
        let weights = &self.scoring;
        if !weights.similarity_weight.is_finite() || !weights.coverage_weight.is_finite() {
            return Err(ResumeMatcherError::Configuration(
                "Scoring weights must be finite numbers".to_string(),
            ));
        }
        if weights.similarity_weight < 0.0 || weights.coverage_weight < 0.0 {
            return Err(ResumeMatcherError::Configuration(
                "Scoring weights must be non-negative".to_string(),
            ));
        }

        let total = weights.similarity_weight + weights.coverage_weight;
        if (total - 1.0).abs() > 0.001 {
            return Err(ResumeMatcherError::Configuration(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                total
            )));
        }

        if self.input.max_file_size_mb == 0 {
            return Err(ResumeMatcherError::Configuration(
                "input.max_file_size_mb must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.max_file_size_mb, 10);
        assert_eq!(config.matching.mode, MatchMode::Substring);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut config = Config::default();
        config.scoring.similarity_weight = -0.5;
        config.scoring.coverage_weight = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let mut config = Config::default();
        config.scoring.similarity_weight = 0.7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_weights() {
        let mut config = Config::default();
        config.scoring.similarity_weight = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scoring.coverage_weight = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_weight_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let content = toml::to_string_pretty(&Config::default())
            .unwrap()
            .replace("similarity_weight = 0.5", "similarity_weight = nan");
        std::fs::write(&path, content).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeMatcherError::Configuration(_))
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.similarity.noise = NoiseMode::Seeded { seed: 42 };
        config.matching.mode = MatchMode::WordBoundary;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_noise_mode_toml_shape() {
        let text = "[noise]\nmode = \"seeded\"\nseed = 7\n";
        let parsed: SimilarityConfig = toml::from_str(text).unwrap();
        assert_eq!(parsed.noise, NoiseMode::Seeded { seed: 7 });
    }
}
