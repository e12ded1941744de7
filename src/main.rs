//! Recruit match: rank job postings against a candidate profile

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use recruit_match::cli::{self, Cli, Commands, ConfigAction};
use recruit_match::config::{Config, OutputFormat};
use recruit_match::input::manager::InputManager;
use recruit_match::matching::normalize::normalize;
use recruit_match::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use recruit_match::output::report::{PairReport, RecommendationReport};
use recruit_match::MatchEngine;
use std::path::{Path, PathBuf};
use std::process;

const RECORD_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_file = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_file).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_file: &Path) -> Result<()> {
    match command {
        Commands::Rank {
            candidate,
            jobs,
            limit,
            all,
            detailed,
            output,
            save,
        } => {
            validate_record_path(&candidate, "Candidate file")?;
            validate_record_path(&jobs, "Job listing")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let engine = MatchEngine::from_config(&config).context("Failed to build match engine")?;
            let mut manager = InputManager::new();
            let candidate_profile = manager
                .load_candidate(&candidate)
                .await
                .with_context(|| format!("Failed to load candidate {}", candidate.display()))?;
            let job_list = manager
                .load_jobs(&jobs)
                .await
                .with_context(|| format!("Failed to load jobs {}", jobs.display()))?;

            let limit = if all {
                None
            } else {
                Some(limit.unwrap_or(config.scoring.recommendation_limit)).filter(|&n| n > 0)
            };
            let detailed = detailed || config.output.detailed;

            info!(
                "Ranking {} jobs for '{}' (limit: {:?})",
                job_list.len(),
                candidate_profile.job_title,
                limit
            );
            let report = RecommendationReport::build(&engine, &candidate_profile, &job_list, limit, detailed);

            let generator = report_generator(&config, format, save.is_some(), detailed);
            let content = generator.generate_report(&report, &format)?;
            let target = save.map(|path| save_target(path, format, &candidate));
            emit(&content, target.as_deref())?;
        }

        Commands::Score {
            candidate,
            job,
            output,
            save,
        } => {
            validate_record_path(&candidate, "Candidate file")?;
            validate_record_path(&job, "Job file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let engine = MatchEngine::from_config(&config).context("Failed to build match engine")?;
            let mut manager = InputManager::new();
            let candidate_profile = manager
                .load_candidate(&candidate)
                .await
                .with_context(|| format!("Failed to load candidate {}", candidate.display()))?;
            let job_posting = manager
                .load_job(&job)
                .await
                .with_context(|| format!("Failed to load job {}", job.display()))?;

            let report = PairReport::build(&engine, &candidate_profile, &job_posting);

            let generator = report_generator(&config, format, save.is_some(), true);
            let content = generator.generate_pair_report(&report, &format)?;
            let target = save.map(|path| save_target(path, format, &candidate));
            emit(&content, target.as_deref())?;
        }

        Commands::Similar { title } => {
            let engine = MatchEngine::from_config(&config).context("Failed to build match engine")?;
            let table = engine.similarity();

            match table.find_group(&normalize(&title)) {
                Some(index) => {
                    println!("🔎 Similar titles for '{}':", title.trim());
                    for member in &table.groups()[index] {
                        println!("  • {}", member);
                    }
                }
                None => {
                    println!("⚠️  No similarity group contains '{}'", title.trim());
                    println!("💡 Only exact and partial title matches will apply");
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("File: {}", config_file.display());
                println!("\nScoring Weights:");
                println!("  Title / work area: {}", config.scoring.title_weight);
                println!("  Location: {}", config.scoring.location_weight);
                println!("  Salary: {}", config.scoring.salary_weight);
                println!("  Skills: {}", config.scoring.skills_weight);
                println!("\nMinimum Match Score: {}%", config.scoring.min_match_score);
                println!("Recommendation Limit: {}", config.scoring.recommendation_limit);
                match &config.similarity.groups_file {
                    Some(path) => println!("Similarity Groups: {}", path.display()),
                    None => println!("Similarity Groups: built-in"),
                }
                println!("\nOutput Format: {:?}", config.output.format);
                println!("Detailed: {}", config.output.detailed);
                println!("Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_file)
                    .context("Failed to write default configuration")?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_file.display());
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut updated = config;
                updated
                    .set(&key, &value)
                    .with_context(|| format!("Failed to set {}", key))?;
                updated
                    .save_to(config_file)
                    .context("Failed to save configuration")?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn validate_record_path(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, RECORD_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("{}: {}", label, e))
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(value) => cli::parse_output_format(value).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(config.output.format),
    }
}

/// Colors are dropped when writing to a file.
fn report_generator(config: &Config, format: OutputFormat, saving: bool, detailed: bool) -> ReportGenerator {
    let use_colors = config.output.color_output && !saving && format == OutputFormat::Console;
    ReportGenerator::with_options(use_colors, detailed, true, true)
}

/// A directory given to `--save` gets a generated file name.
fn save_target(save: PathBuf, format: OutputFormat, candidate: &Path) -> PathBuf {
    if save.is_dir() {
        let name = suggest_filename(&format, &candidate.to_string_lossy(), true);
        save.join(name)
    } else {
        save
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
