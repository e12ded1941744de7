//! Match scoring engine combining the attribute scorers

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::matching::aggregate::{applicable_weight, renormalized_percentage, Criterion};
use crate::matching::model::{CandidateAttributes, JobAttributes, MatchBreakdown, MatchResult, ScoredJob};
use crate::matching::ranking::{passes_threshold, rank_scored};
use crate::matching::scorers::{match_title, score_location, score_salary, score_skills, TitleMatch};
use crate::matching::similarity::SimilarityTable;
use log::{debug, info};

/// Scores candidate/job pairs and ranks job lists for a candidate.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    scoring: ScoringConfig,
    similarity: SimilarityTable,
}

impl MatchEngine {
    pub fn new(scoring: ScoringConfig, similarity: SimilarityTable) -> Self {
        Self { scoring, similarity }
    }

    /// Default weights, threshold and built-in similarity groups.
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default(), SimilarityTable::builtin())
    }

    /// Engine configured from a loaded config, reading the custom similarity
    /// group file when one is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let similarity = match &config.similarity.groups_file {
            Some(path) => {
                info!("Using similarity groups from {}", path.display());
                SimilarityTable::load(path)?
            }
            None => SimilarityTable::builtin(),
        };

        Ok(Self::new(config.scoring.clone(), similarity))
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn similarity(&self) -> &SimilarityTable {
        &self.similarity
    }

    fn title_match(&self, candidate: &CandidateAttributes, job: &JobAttributes) -> Option<TitleMatch> {
        match_title(
            &self.similarity,
            &candidate.job_title,
            &job.work_area,
            job.specialization.as_deref(),
        )
    }

    fn criteria(
        &self,
        title: Option<TitleMatch>,
        candidate: &CandidateAttributes,
        job: &JobAttributes,
    ) -> [Criterion; 4] {
        let title = title.map(|m| m.score);
        let location = score_location(&candidate.locations, job.location.as_deref());
        let salary = score_salary(
            candidate.min_salary,
            candidate.max_salary,
            job.salary_min,
            job.salary_max,
        );
        let skills = score_skills(&candidate.skills, &job.required_skills);

        [
            Criterion::new(self.scoring.title_weight, title),
            Criterion::new(self.scoring.location_weight, location),
            Criterion::new(self.scoring.salary_weight, salary),
            Criterion::new(self.scoring.skills_weight, skills),
        ]
    }

    /// Match score in `[0, 100]` for one pair.
    pub fn score(&self, candidate: &CandidateAttributes, job: &JobAttributes) -> u8 {
        let title = self.title_match(candidate, job);
        renormalized_percentage(&self.criteria(title, candidate, job))
    }

    /// Sub-scores behind [`MatchEngine::score`].
    pub fn breakdown(&self, candidate: &CandidateAttributes, job: &JobAttributes) -> MatchBreakdown {
        let title_match = self.title_match(candidate, job);
        let criteria = self.criteria(title_match, candidate, job);
        let [title, location, salary, skills] = criteria;

        MatchBreakdown {
            title: title.score,
            title_rule: title_match.map(|m| m.rule),
            location: location.score,
            salary: salary.score,
            skills: skills.score,
            applicable_weight: applicable_weight(&criteria),
            score: renormalized_percentage(&criteria),
        }
    }

    pub fn evaluate(&self, candidate: &CandidateAttributes, job: &JobAttributes) -> MatchResult {
        let score = self.score(candidate, job);
        MatchResult {
            job_id: job.id.clone(),
            score,
            included: passes_threshold(score, self.scoring.min_match_score),
        }
    }

    /// Jobs meeting the threshold, best first. The full qualifying set is
    /// returned; callers apply their own display limit.
    pub fn rank(&self, candidate: &CandidateAttributes, jobs: &[JobAttributes]) -> Vec<ScoredJob> {
        let scored: Vec<ScoredJob> = jobs
            .iter()
            .map(|job| {
                let match_score = self.score(candidate, job);
                debug!("Job {} scored {}", job.id, match_score);
                ScoredJob {
                    job: job.clone(),
                    match_score,
                }
            })
            .collect();

        let ranked = rank_scored(scored, self.scoring.min_match_score);
        debug!(
            "{} of {} jobs met the {}% threshold",
            ranked.len(),
            jobs.len(),
            self.scoring.min_match_score
        );
        ranked
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
