//! Candidate, job and result records used by the scoring engine

use crate::matching::scorers::TitleRule;
use serde::{Deserialize, Serialize};

/// The subset of a candidate profile that takes part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAttributes {
    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(default)]
    pub min_salary: Option<i64>,

    #[serde(default)]
    pub max_salary: Option<i64>,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// A job posting as fetched by the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAttributes {
    pub id: String,

    /// Display only, never scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display only, never scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default)]
    pub work_area: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,

    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl JobAttributes {
    /// Title if set, otherwise the work area, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| Some(self.work_area.as_str()).filter(|w| !w.trim().is_empty()))
            .unwrap_or(&self.id)
    }
}

/// Transient outcome of scoring one candidate/job pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: String,
    pub score: u8,
    pub included: bool,
}

/// A job record augmented with its match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobAttributes,
    pub match_score: u8,
}

/// Per-attribute view of a single scoring run. `None` marks an attribute
/// that was not applicable for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub title: Option<f64>,
    pub title_rule: Option<TitleRule>,
    pub location: Option<f64>,
    pub salary: Option<f64>,
    pub skills: Option<f64>,
    pub applicable_weight: u64,
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_camel_case() {
        let json = r#"{
            "jobTitle": "Software Engineer",
            "locations": ["Bristol"],
            "minSalary": 35000,
            "maxSalary": 45000,
            "skills": ["React"]
        }"#;

        let candidate: CandidateAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.job_title, "Software Engineer");
        assert_eq!(candidate.min_salary, Some(35000));
        assert_eq!(candidate.skills, vec!["React".to_string()]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let candidate: CandidateAttributes = serde_json::from_str("{}").unwrap();
        assert!(candidate.job_title.is_empty());
        assert!(candidate.locations.is_empty());
        assert_eq!(candidate.max_salary, None);

        let job: JobAttributes = serde_json::from_str(r#"{"id": "j1", "salaryMin": null}"#).unwrap();
        assert_eq!(job.id, "j1");
        assert_eq!(job.salary_min, None);
        assert!(job.required_skills.is_empty());
    }

    #[test]
    fn test_non_positive_salaries_still_deserialize() {
        let candidate: CandidateAttributes =
            serde_json::from_str(r#"{"jobTitle": "Nurse", "minSalary": -1, "maxSalary": 0}"#).unwrap();
        assert_eq!(candidate.min_salary, Some(-1));
        assert_eq!(candidate.max_salary, Some(0));

        let job: JobAttributes = serde_json::from_str(r#"{"id": "j2", "salaryMin": -5000}"#).unwrap();
        assert_eq!(job.salary_min, Some(-5000));
    }

    #[test]
    fn test_scored_job_flattens_job_fields() {
        let scored = ScoredJob {
            job: JobAttributes {
                id: "j7".to_string(),
                work_area: "Finance".to_string(),
                ..Default::default()
            },
            match_score: 82,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "j7");
        assert_eq!(value["workArea"], "Finance");
        assert_eq!(value["matchScore"], 82);
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut job = JobAttributes {
            id: "j1".to_string(),
            ..Default::default()
        };
        assert_eq!(job.display_name(), "j1");

        job.work_area = "IT".to_string();
        assert_eq!(job.display_name(), "IT");

        job.title = Some("Platform Engineer".to_string());
        assert_eq!(job.display_name(), "Platform Engineer");
    }
}
