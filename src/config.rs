//! Configuration management for the recruit matcher

use crate::error::{MatchError, Result};
use crate::matching::ranking::{DEFAULT_MIN_MATCH_SCORE, DEFAULT_RECOMMENDATION_LIMIT};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on the sum of the four scoring weights.
pub const MAX_TOTAL_WEIGHT: u64 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub title_weight: u32,
    pub location_weight: u32,
    pub salary_weight: u32,
    pub skills_weight: u32,
    pub min_match_score: u8,
    pub recommendation_limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// TOML file replacing the built-in title groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_weight: 30,
            location_weight: 20,
            salary_weight: 25,
            skills_weight: 25,
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl ScoringConfig {
    pub fn total_weight(&self) -> u64 {
        [
            self.title_weight,
            self.location_weight,
            self.salary_weight,
            self.skills_weight,
        ]
        .iter()
        .map(|&w| u64::from(w))
        .sum()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            info!("Wrote default configuration to {}", config_path.display());
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MatchError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("recruit-match")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let total_weight = self.scoring.total_weight();
        if total_weight == 0 {
            return Err(MatchError::Configuration(
                "At least one scoring weight must be greater than zero".to_string(),
            ));
        }
        if total_weight > MAX_TOTAL_WEIGHT {
            return Err(MatchError::Configuration(format!(
                "Scoring weights add up to {}, the maximum is {}",
                total_weight, MAX_TOTAL_WEIGHT
            )));
        }
        if self.scoring.min_match_score > 100 {
            return Err(MatchError::Configuration(format!(
                "min_match_score must be between 0 and 100, got {}",
                self.scoring.min_match_score
            )));
        }
        Ok(())
    }

    /// Update one value by dotted key, e.g. `scoring.min_match_score`.
    /// The config is left untouched when the new value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        updated.apply(key, value)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.title_weight" => self.scoring.title_weight = parse_value(key, value)?,
            "scoring.location_weight" => self.scoring.location_weight = parse_value(key, value)?,
            "scoring.salary_weight" => self.scoring.salary_weight = parse_value(key, value)?,
            "scoring.skills_weight" => self.scoring.skills_weight = parse_value(key, value)?,
            "scoring.min_match_score" => self.scoring.min_match_score = parse_value(key, value)?,
            "scoring.recommendation_limit" => {
                self.scoring.recommendation_limit = parse_value(key, value)?
            }
            "similarity.groups_file" => {
                self.similarity.groups_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(MatchError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(MatchError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MatchError::Configuration(format!("Invalid value for {}: {}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = Config::default();
        assert_eq!(config.scoring.title_weight, 30);
        assert_eq!(config.scoring.location_weight, 20);
        assert_eq!(config.scoring.salary_weight, 25);
        assert_eq!(config.scoring.skills_weight, 25);
        assert_eq!(config.scoring.total_weight(), 100);
        assert_eq!(config.scoring.min_match_score, 40);
        assert_eq!(config.scoring.recommendation_limit, 6);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.min_match_score = 55;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmin_match_score = 60\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.min_match_score, 60);
        assert_eq!(loaded.scoring.title_weight, 30);
        assert!(loaded.output.color_output);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scoring]\ntitle_weight = 0\nlocation_weight = 0\nsalary_weight = 0\nskills_weight = 0\n",
        )
        .unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "[scoring]\nmin_match_score = 101\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "not = [valid").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_oversized_weights_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\ntitle_weight = 4294967295\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatchError::Configuration(_)));

        let mut config = Config::default();
        assert!(config.set("scoring.skills_weight", "4294967295").is_err());
        assert_eq!(config.scoring.skills_weight, 25);
        config.set("scoring.skills_weight", "9925").unwrap();
        assert_eq!(config.scoring.total_weight(), MAX_TOTAL_WEIGHT);
        assert!(config.set("scoring.skills_weight", "9926").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("scoring.min_match_score", "50").unwrap();
        config.set("output.format", "json").unwrap();
        config.set("similarity.groups_file", "/tmp/groups.toml").unwrap();

        assert_eq!(config.scoring.min_match_score, 50);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.similarity.groups_file, Some(PathBuf::from("/tmp/groups.toml")));

        assert!(config.set("scoring.min_match_score", "abc").is_err());
        assert!(config.set("scoring.min_match_score", "150").is_err());
        assert_eq!(config.scoring.min_match_score, 50);
        assert!(config.set("models.default", "x").is_err());
    }
}
