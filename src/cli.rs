//! CLI interface for the recruit matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "recruit-match")]
#[command(about = "Rank job postings against a candidate profile")]
#[command(long_about = "Score candidate/job pairs on title, location, salary and skills, and recommend the best matching jobs")]
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
    /// Recommend the best matching jobs for a candidate
    Rank {
        /// Path to candidate profile (JSON, TOML)
        #[arg(long)]
        candidate: PathBuf,

        /// Path to job listing (JSON, TOML)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Maximum number of recommendations
        #[arg(short, long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Show every job above the threshold
        #[arg(long)]
        all: bool,

        /// Include per-attribute breakdowns
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score a single candidate/job pair
    Score {
        /// Path to candidate profile (JSON, TOML)
        #[arg(long)]
        candidate: PathBuf,

        /// Path to job posting (JSON, TOML)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the similarity group for a job title
    Similar {
        /// Job title to look up
        title: String,
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

    /// Print the configuration file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.min_match_score")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["json", "toml"];
        assert!(validate_file_extension(Path::new("jobs.JSON"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("jobs.csv"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("jobs"), &allowed).is_err());
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::parse_from([
            "recruit-match",
            "rank",
            "--candidate",
            "c.json",
            "--jobs",
            "j.json",
            "--limit",
            "3",
            "-o",
            "json",
        ]);

        match cli.command {
            Commands::Rank { limit, all, output, .. } => {
                assert_eq!(limit, Some(3));
                assert!(!all);
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_limit_conflicts_with_all() {
        let result = Cli::try_parse_from([
            "recruit-match",
            "rank",
            "--candidate",
            "c.json",
            "--jobs",
            "j.json",
            "--limit",
            "3",
            "--all",
        ]);
        assert!(result.is_err());
    }
}
