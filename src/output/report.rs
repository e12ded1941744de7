//! Report structures handed to the formatters

use crate::config::ScoringConfig;
use crate::matching::model::{CandidateAttributes, JobAttributes, MatchBreakdown, ScoredJob};
use crate::matching::ranking::truncate;
use crate::matching::MatchEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ranked recommendations for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub candidate_title: String,

    /// Jobs scored, before the threshold
    pub jobs_considered: usize,

    /// Jobs at or above the threshold, before truncation
    pub jobs_qualified: usize,

    pub recommendations: Vec<Recommendation>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub rank: usize,

    #[serde(flatten)]
    pub scored: ScoredJob,

    /// Only filled in for detailed reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<MatchBreakdown>,
}

/// Full breakdown for a single candidate/job pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub candidate_title: String,
    pub job: JobAttributes,
    pub breakdown: MatchBreakdown,
    pub included: bool,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub weights: WeightSummary,
    pub min_match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSummary {
    pub title: u32,
    pub location: u32,
    pub salary: u32,
    pub skills: u32,
}

impl ReportMetadata {
    fn new(scoring: &ScoringConfig, limit: Option<usize>) -> Self {
        Self {
            generated_at: Utc::now(),
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            weights: WeightSummary {
                title: scoring.title_weight,
                location: scoring.location_weight,
                salary: scoring.salary_weight,
                skills: scoring.skills_weight,
            },
            min_match_score: scoring.min_match_score,
            limit,
        }
    }
}

impl RecommendationReport {
    /// Rank `jobs` for the candidate and keep the first `limit` entries.
    pub fn build(
        engine: &MatchEngine,
        candidate: &CandidateAttributes,
        jobs: &[JobAttributes],
        limit: Option<usize>,
        detailed: bool,
    ) -> Self {
        let ranked = engine.rank(candidate, jobs);

        let recommendations = truncate(&ranked, limit)
            .iter()
            .enumerate()
            .map(|(index, scored)| Recommendation {
                rank: index + 1,
                breakdown: detailed.then(|| engine.breakdown(candidate, &scored.job)),
                scored: scored.clone(),
            })
            .collect();

        Self {
            candidate_title: candidate.job_title.clone(),
            jobs_considered: jobs.len(),
            jobs_qualified: ranked.len(),
            recommendations,
            metadata: ReportMetadata::new(engine.scoring(), limit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

impl PairReport {
    pub fn build(engine: &MatchEngine, candidate: &CandidateAttributes, job: &JobAttributes) -> Self {
        let breakdown = engine.breakdown(candidate, job);
        let included = engine.evaluate(candidate, job).included;

        Self {
            candidate_title: candidate.job_title.clone(),
            job: job.clone(),
            breakdown,
            included,
            metadata: ReportMetadata::new(engine.scoring(), None),
        }
    }
}
