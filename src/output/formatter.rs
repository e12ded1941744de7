//! Output formatters for recommendation and pair reports

use crate::config::OutputFormat;
use crate::error::{MatchError, Result};
use crate::matching::model::{JobAttributes, MatchBreakdown};
use crate::output::report::{PairReport, RecommendationReport, ReportMetadata};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn format_pair(&self, report: &PairReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn format_timestamp(metadata: &ReportMetadata) -> String {
    metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn format_sub_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.0}%", s * 100.0),
        None => "n/a".to_string(),
    }
}

fn location_label(job: &JobAttributes) -> &str {
    job.location.as_deref().filter(|l| !l.trim().is_empty()).unwrap_or("-")
}

fn salary_label(job: &JobAttributes) -> String {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        (Some(min), None) => format!("from {}", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => "-".to_string(),
    }
}

/// Breakdown rows as (label, sub-score, weight) in display order.
fn breakdown_rows(breakdown: &MatchBreakdown, metadata: &ReportMetadata) -> [(&'static str, Option<f64>, u32); 4] {
    [
        ("Title / work area", breakdown.title, metadata.weights.title),
        ("Location", breakdown.location, metadata.weights.location),
        ("Salary", breakdown.salary, metadata.weights.salary),
        ("Skills", breakdown.skills, metadata.weights.skills),
    ]
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
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("GOOD", Color::Yellow),
            40..=59 => ("FAIR", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_breakdown(&self, breakdown: &MatchBreakdown, metadata: &ReportMetadata, indent: &str) -> String {
        let mut output = String::new();
        for (label, score, weight) in breakdown_rows(breakdown, metadata) {
            let value = format_sub_score(score);
            let value = if score.is_some() {
                value
            } else {
                self.colorize(&value, Color::BrightBlack)
            };
            output.push_str(&format!("{}{:<18} {:>5} (weight: {})\n", indent, label, value, weight));
        }
        if let Some(rule) = breakdown.title_rule {
            output.push_str(&format!("{}Title rule: {}\n", indent, rule));
        }
        output.push_str(&format!("{}Applicable weight: {}\n", indent, breakdown.applicable_weight));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("JOB RECOMMENDATIONS", 1));
        output.push_str(&format!("Generated: {}\n", format_timestamp(&report.metadata)));
        output.push_str(&format!(
            "Candidate: {}\n",
            self.colorize(&report.candidate_title, Color::Cyan)
        ));
        output.push_str(&format!(
            "Jobs considered: {} | Qualified (>= {}%): {}\n",
            report.jobs_considered, report.metadata.min_match_score, report.jobs_qualified
        ));

        output.push_str(&self.format_header("Top Matches", 2));
        if report.is_empty() {
            output.push_str(&self.colorize("  No jobs met the match threshold\n", Color::Yellow));
        }

        for rec in &report.recommendations {
            let job = &rec.scored.job;
            output.push_str(&format!(
                "{}. {} {}% {}\n",
                rec.rank,
                self.colorize(job.display_name(), Color::White),
                rec.scored.match_score,
                self.format_score_badge(rec.scored.match_score)
            ));

            let company = job.company.as_deref().unwrap_or("-");
            output.push_str(&format!(
                "   {} | {} | {} | salary: {}\n",
                self.colorize(&job.id, Color::BrightBlack),
                company,
                location_label(job),
                salary_label(job)
            ));

            if self.detailed {
                if let Some(breakdown) = &rec.breakdown {
                    output.push_str(&self.format_breakdown(breakdown, &report.metadata, "   "));
                }
            }
            output.push('\n');
        }

        if report.jobs_qualified > report.recommendations.len() {
            output.push_str(&format!(
                "... {} more qualifying jobs not shown\n",
                report.jobs_qualified - report.recommendations.len()
            ));
        }

        output.push_str(&format!(
            "\n{} Generated by Recruit Match v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version
        ));

        Ok(output)
    }

    fn format_pair(&self, report: &PairReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("MATCH BREAKDOWN", 1));
        output.push_str(&format!(
            "Candidate: {}\n",
            self.colorize(&report.candidate_title, Color::Cyan)
        ));
        output.push_str(&format!(
            "Job: {} ({})\n",
            report.job.display_name(),
            report.job.id
        ));

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            report.breakdown.score,
            self.format_score_badge(report.breakdown.score)
        ));
        let verdict = if report.included {
            self.colorize("Recommended", Color::Green)
        } else {
            self.colorize("Below threshold", Color::Red)
        };
        output.push_str(&format!(
            "Verdict: {} (threshold: {}%)\n",
            verdict, report.metadata.min_match_score
        ));

        output.push_str(&self.format_header("Attributes", 3));
        output.push_str(&self.format_breakdown(&report.breakdown, &report.metadata, "  "));

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

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_pair(&self, report: &PairReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            75..=89 => "🟢 Strong",
            60..=74 => "🟡 Good",
            40..=59 => "🟠 Fair",
            _ => "🔴 Weak",
        }
    }

    /// Pipes would break the table layout
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn breakdown_table(breakdown: &MatchBreakdown, metadata: &ReportMetadata) -> String {
        let mut output = String::from("| Attribute | Score | Weight |\n|-----------|-------|--------|\n");
        for (label, score, weight) in breakdown_rows(breakdown, metadata) {
            output.push_str(&format!("| {} | {} | {} |\n", label, format_sub_score(score), weight));
        }
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Job Recommendations\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Threshold:** {}%\n\n",
                format_timestamp(&report.metadata),
                report.metadata.min_match_score
            ));
        }

        output.push_str(&format!("**Candidate:** {}\n\n", Self::cell(&report.candidate_title)));
        output.push_str(&format!(
            "**Jobs considered:** {} | **Qualified:** {}\n\n",
            report.jobs_considered, report.jobs_qualified
        ));

        if report.is_empty() {
            output.push_str("_No jobs met the match threshold._\n");
            return Ok(output);
        }

        output.push_str("| # | Job | Company | Location | Salary | Score |\n");
        output.push_str("|---|-----|---------|----------|--------|-------|\n");
        for rec in &report.recommendations {
            let job = &rec.scored.job;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {}% {} |\n",
                rec.rank,
                Self::cell(job.display_name()),
                Self::cell(job.company.as_deref().unwrap_or("-")),
                Self::cell(location_label(job)),
                salary_label(job),
                rec.scored.match_score,
                Self::markdown_score_badge(rec.scored.match_score)
            ));
        }
        output.push('\n');

        let detailed: Vec<_> = report
            .recommendations
            .iter()
            .filter_map(|rec| rec.breakdown.as_ref().map(|b| (rec, b)))
            .collect();
        if !detailed.is_empty() {
            output.push_str("## Breakdown\n\n");
            for (rec, breakdown) in detailed {
                output.push_str(&format!(
                    "### {}. {}\n\n",
                    rec.rank,
                    rec.scored.job.display_name()
                ));
                output.push_str(&Self::breakdown_table(breakdown, &report.metadata));
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Recruit Match v{}*\n",
                report.metadata.matcher_version
            ));
        }

        Ok(output)
    }

    fn format_pair(&self, report: &PairReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Match Breakdown\n\n");
        output.push_str(&format!("**Candidate:** {}\n\n", Self::cell(&report.candidate_title)));
        output.push_str(&format!(
            "**Job:** {} (`{}`)\n\n",
            Self::cell(report.job.display_name()),
            report.job.id
        ));
        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            report.breakdown.score,
            Self::markdown_score_badge(report.breakdown.score)
        ));
        output.push_str(&Self::breakdown_table(&report.breakdown, &report.metadata));

        if self.include_metadata {
            output.push_str(&format!(
                "\n*Generated {} | threshold {}%*\n",
                format_timestamp(&report.metadata),
                report.metadata.min_match_score
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

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &RecommendationReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_pair_report(&self, report: &PairReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_pair(report)
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
    fs::write(file_path, content).map_err(|e| {
        MatchError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e))
    })
}

pub fn suggest_filename(format: &OutputFormat, candidate_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(candidate_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_matches{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_matches{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_matches{}.md", base_name, timestamp_suffix),
    }
}
