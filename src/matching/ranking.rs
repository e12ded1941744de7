//! Inclusion threshold and ordering of scored jobs

use crate::matching::model::ScoredJob;

/// Lowest score a job needs to be recommended.
pub const DEFAULT_MIN_MATCH_SCORE: u8 = 40;

/// Number of recommendations the candidate view shows.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

pub fn passes_threshold(score: u8, min_match_score: u8) -> bool {
    score >= min_match_score
}

/// Drop entries below the threshold and sort the rest by descending score.
/// Equal scores keep their input order.
pub fn rank_scored(scored: Vec<ScoredJob>, min_match_score: u8) -> Vec<ScoredJob> {
    let mut ranked: Vec<ScoredJob> = scored
        .into_iter()
        .filter(|s| passes_threshold(s.match_score, min_match_score))
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// Leading `limit` entries, or all of them when `limit` is `None`.
pub fn truncate(ranked: &[ScoredJob], limit: Option<usize>) -> &[ScoredJob] {
    match limit {
        Some(n) => &ranked[..n.min(ranked.len())],
        None => ranked,
    }
}
