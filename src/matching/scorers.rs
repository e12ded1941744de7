//! Per-attribute scorers
//!
//! Each scorer returns `None` when either side lacks the data it needs, so the
//! attribute can be left out of the weighted total, and otherwise a fraction
//! in `[0.0, 1.0]`.

use crate::matching::normalize::{non_blank, normalize_all, relates};
use crate::matching::similarity::SimilarityTable;
use serde::{Deserialize, Serialize};
use std::fmt;

const EXACT_SCORE: f64 = 1.0;
const PARTIAL_SCORE: f64 = 0.8;
const SIMILAR_TITLE_SCORE: f64 = 0.7;
const SPECIALIZATION_SCORE: f64 = 0.6;
const TOKEN_OVERLAP_CEILING: f64 = 0.5;

/// Which rule of the title cascade produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleRule {
    Exact,
    Partial,
    SimilarTitle,
    Specialization,
    TokenOverlap,
    NoMatch,
}

impl fmt::Display for TitleRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            TitleRule::Exact => "exact",
            TitleRule::Partial => "partial",
            TitleRule::SimilarTitle => "similar title",
            TitleRule::Specialization => "specialization",
            TitleRule::TokenOverlap => "word overlap",
            TitleRule::NoMatch => "no match",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleMatch {
    pub rule: TitleRule,
    pub score: f64,
}

/// Compare a candidate's title with a job's work area (and specialization).
pub fn match_title(
    table: &SimilarityTable,
    job_title: &str,
    work_area: &str,
    specialization: Option<&str>,
) -> Option<TitleMatch> {
    let title = non_blank(Some(job_title))?;
    let area = non_blank(Some(work_area))?;

    let (rule, score) = if title == area {
        (TitleRule::Exact, EXACT_SCORE)
    } else if relates(&title, &area) {
        (TitleRule::Partial, PARTIAL_SCORE)
    } else {
        let group = table.normalized_group(&title);

        if group.iter().any(|member| relates(member, &area)) {
            (TitleRule::SimilarTitle, SIMILAR_TITLE_SCORE)
        } else if non_blank(specialization).is_some_and(|spec| {
            relates(&title, &spec) || group.iter().any(|member| relates(member, &spec))
        }) {
            (TitleRule::Specialization, SPECIALIZATION_SCORE)
        } else {
            let overlap = token_overlap(&title, &area);
            if overlap > 0.0 {
                (TitleRule::TokenOverlap, overlap)
            } else {
                (TitleRule::NoMatch, 0.0)
            }
        }
    };

    Some(TitleMatch {
        rule,
        score: score.clamp(0.0, 1.0),
    })
}

pub fn score_title(
    table: &SimilarityTable,
    job_title: &str,
    work_area: &str,
    specialization: Option<&str>,
) -> Option<f64> {
    match_title(table, job_title, work_area, specialization).map(|m| m.score)
}

/// Share of title words that relate to some work-area word, scaled to at
/// most half a point.
fn token_overlap(title: &str, area: &str) -> f64 {
    let title_words: Vec<&str> = title.split_whitespace().collect();
    let area_words: Vec<&str> = area.split_whitespace().collect();

    let denominator = title_words.len().max(area_words.len());
    if denominator == 0 {
        return 0.0;
    }

    let matching = title_words
        .iter()
        .filter(|word| area_words.iter().any(|a| relates(word, a)))
        .count();

    matching as f64 / denominator as f64 * TOKEN_OVERLAP_CEILING
}

/// 1.0 when any preferred location appears inside the job location.
pub fn score_location(locations: &[String], job_location: Option<&str>) -> Option<f64> {
    let job_location = non_blank(job_location)?;
    let preferred = normalize_all(locations);
    if preferred.is_empty() {
        return None;
    }

    let hit = preferred.iter().any(|loc| job_location.contains(loc.as_str()));
    Some(if hit { 1.0 } else { 0.0 })
}

/// 1.0 when the two salary bands overlap; touching ends count. Zero or
/// negative figures count as missing.
pub fn score_salary(
    candidate_min: Option<i64>,
    candidate_max: Option<i64>,
    job_min: Option<i64>,
    job_max: Option<i64>,
) -> Option<f64> {
    let positive = |v: Option<i64>| v.filter(|&s| s > 0);
    let candidate_min = positive(candidate_min)?;
    let candidate_max = positive(candidate_max)?;
    let job_min = positive(job_min)?;
    let job_max = positive(job_max)?;

    let disjoint = candidate_max < job_min || candidate_min > job_max;
    Some(if disjoint { 0.0 } else { 1.0 })
}

/// Fraction of skills related across both lists, over the longer list.
pub fn score_skills(candidate_skills: &[String], required_skills: &[String]) -> Option<f64> {
    let candidate = normalize_all(candidate_skills);
    let required = normalize_all(required_skills);
    if candidate.is_empty() || required.is_empty() {
        return None;
    }

    let matching = candidate
        .iter()
        .filter(|skill| required.iter().any(|r| relates(skill, r)))
        .count();

    Some(matching as f64 / candidate.len().max(required.len()) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SimilarityTable {
        SimilarityTable::builtin()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_exact() {
        let m = match_title(&table(), "Software Engineer", "software engineer", None).unwrap();
        assert_eq!(m.rule, TitleRule::Exact);
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_title_partial() {
        let m = match_title(&table(), "Senior Accountant", "Accountant", None).unwrap();
        assert_eq!(m.rule, TitleRule::Partial);
        assert_eq!(m.score, 0.8);
    }

    #[test]
    fn test_title_similar_group_member() {
        // "Programmer" is grouped with "Web Developer"
        let m = match_title(&table(), "Programmer", "Web Developer", None).unwrap();
        assert_eq!(m.rule, TitleRule::SimilarTitle);
        assert_eq!(m.score, 0.7);
    }

    #[test]
    fn test_title_specialization() {
        let m = match_title(&table(), "Bookkeeper", "Operations", Some("Bookkeeper")).unwrap();
        assert_eq!(m.rule, TitleRule::Specialization);
        assert_eq!(m.score, 0.6);

        // Reached through a group member rather than the title itself
        let m = match_title(&table(), "Recruiter", "Human Capital", Some("Talent Acquisition")).unwrap();
        assert_eq!(m.rule, TitleRule::Specialization);
    }

    #[test]
    fn test_title_blank_specialization_is_ignored() {
        let m = match_title(&table(), "Zorblatt", "Finance", Some("  ")).unwrap();
        assert_eq!(m.rule, TitleRule::NoMatch);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_title_token_overlap() {
        // "sales" relates to "salesforce"; 1 of max(2, 2) words
        let m = match_title(&table(), "Zorblatt Sales", "Salesforce Operations", None).unwrap();
        assert_eq!(m.rule, TitleRule::TokenOverlap);
        assert!((m.score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_title_no_match() {
        assert_eq!(score_title(&table(), "Software Engineer", "Finance", None), Some(0.0));
    }

    #[test]
    fn test_title_not_applicable_when_blank() {
        assert_eq!(score_title(&table(), "", "Finance", None), None);
        assert_eq!(score_title(&table(), "Nurse", "   ", None), None);
    }

    #[test]
    fn test_location_substring_of_job_location() {
        let locations = strings(&["bristol"]);
        assert_eq!(score_location(&locations, Some("Bristol, UK")), Some(1.0));
        assert_eq!(score_location(&locations, Some("Manchester")), Some(0.0));
    }

    #[test]
    fn test_location_any_preference_matches() {
        let locations = strings(&["Leeds", "London"]);
        assert_eq!(score_location(&locations, Some("Central London")), Some(1.0));
    }

    #[test]
    fn test_location_not_applicable() {
        assert_eq!(score_location(&[], Some("London")), None);
        assert_eq!(score_location(&strings(&["", "  "]), Some("London")), None);
        assert_eq!(score_location(&strings(&["London"]), None), None);
        assert_eq!(score_location(&strings(&["London"]), Some(" ")), None);
    }

    #[test]
    fn test_salary_touching_ranges_overlap() {
        assert_eq!(score_salary(Some(30000), Some(40000), Some(40000), Some(50000)), Some(1.0));
        assert_eq!(score_salary(Some(30000), Some(39999), Some(40000), Some(50000)), Some(0.0));
        assert_eq!(score_salary(Some(50001), Some(60000), Some(40000), Some(50000)), Some(0.0));
    }

    #[test]
    fn test_salary_not_applicable_without_all_fields() {
        assert_eq!(score_salary(None, Some(40000), Some(40000), Some(50000)), None);
        assert_eq!(score_salary(Some(30000), Some(40000), Some(0), Some(50000)), None);
        assert_eq!(score_salary(Some(30000), Some(40000), Some(40000), None), None);
        assert_eq!(score_salary(Some(-1), Some(40000), Some(40000), Some(50000)), None);
        assert_eq!(score_salary(Some(30000), Some(40000), Some(40000), Some(-50000)), None);
    }

    #[test]
    fn test_skills_fraction_over_longer_list() {
        let candidate = strings(&["React", "TypeScript"]);
        let required = strings(&["react native", "GraphQL", "Go", "SQL"]);
        assert_eq!(score_skills(&candidate, &required), Some(0.25));
    }

    #[test]
    fn test_skills_full_overlap() {
        let skills = strings(&["React", "TypeScript"]);
        assert_eq!(score_skills(&skills, &skills), Some(1.0));
    }

    #[test]
    fn test_skills_not_applicable() {
        assert_eq!(score_skills(&[], &strings(&["Excel"])), None);
        assert_eq!(score_skills(&strings(&["Excel"]), &strings(&[" "])), None);
    }
}
