//! Job title similarity groups
//!
//! Titles are resolved to a group of interchangeable titles so that wording
//! differences ("Software Engineer" vs "Software Developer") still match.
//! Lookup is order sensitive: when a title could belong to several groups the
//! first group in declaration order wins.

use crate::error::{MatchError, Result};
use crate::matching::normalize::{normalize, relates};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Built-in groups, kept in declaration order.
const DEFAULT_GROUPS: &[&[&str]] = &[
    &[
        "Software Engineer",
        "Software Developer",
        "Programmer",
        "Application Developer",
        "Full Stack Developer",
        "Backend Developer",
        "Frontend Developer",
        "Web Developer",
    ],
    &[
        "Data Scientist",
        "Data Analyst",
        "Data Engineer",
        "Machine Learning Engineer",
        "Business Intelligence Analyst",
    ],
    &[
        "DevOps Engineer",
        "Site Reliability Engineer",
        "Cloud Engineer",
        "Platform Engineer",
        "Infrastructure Engineer",
    ],
    &["Project Manager", "Programme Manager", "Delivery Manager", "Scrum Master"],
    &["Product Manager", "Product Owner"],
    &["UX Designer", "UI Designer", "Product Designer", "Graphic Designer"],
    &[
        "Accountant",
        "Financial Analyst",
        "Finance Manager",
        "Bookkeeper",
        "Auditor",
    ],
    &[
        "Sales Executive",
        "Account Manager",
        "Business Development Manager",
        "Sales Representative",
    ],
    &[
        "Marketing Manager",
        "Marketing Executive",
        "Digital Marketing Specialist",
        "Content Marketer",
        "SEO Specialist",
    ],
    &[
        "HR Manager",
        "Human Resources Advisor",
        "Recruiter",
        "Talent Acquisition Specialist",
    ],
    &[
        "Customer Service Advisor",
        "Customer Support Representative",
        "Call Centre Agent",
    ],
    &["Nurse", "Registered Nurse", "Healthcare Assistant", "Care Assistant"],
    &["Teacher", "Tutor", "Teaching Assistant", "Lecturer"],
    &[
        "Administrator",
        "Administrative Assistant",
        "Office Manager",
        "Receptionist",
        "Personal Assistant",
    ],
    &[
        "Warehouse Operative",
        "Picker Packer",
        "Forklift Driver",
        "Logistics Coordinator",
    ],
];

/// On-disk layout of a custom group file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarityGroupsFile {
    #[serde(default)]
    pub groups: Vec<SimilarityGroupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityGroupEntry {
    pub titles: Vec<String>,
}

/// Immutable lookup table of title groups.
#[derive(Debug, Clone)]
pub struct SimilarityTable {
    groups: Vec<Vec<String>>,
    normalized: Vec<Vec<String>>,
    exact: HashMap<String, usize>,
}

impl SimilarityTable {
    /// Table built from the groups that ship with the crate.
    pub fn builtin() -> Self {
        let groups = DEFAULT_GROUPS
            .iter()
            .map(|group| group.iter().map(|t| t.to_string()).collect())
            .collect();
        Self::build(groups)
    }

    /// Validate and index custom groups.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Result<Self> {
        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(MatchError::Configuration(format!(
                    "Similarity group {} has no titles",
                    index + 1
                )));
            }
            if group.iter().any(|t| t.trim().is_empty()) {
                return Err(MatchError::Configuration(format!(
                    "Similarity group {} contains a blank title",
                    index + 1
                )));
            }
        }

        Ok(Self::build(groups))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SimilarityGroupsFile = toml::from_str(content)
            .map_err(|e| MatchError::Configuration(format!("Failed to parse similarity groups: {}", e)))?;
        Self::from_groups(file.groups.into_iter().map(|g| g.titles).collect())
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading similarity groups from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn build(groups: Vec<Vec<String>>) -> Self {
        let normalized: Vec<Vec<String>> = groups
            .iter()
            .map(|group| group.iter().map(|t| normalize(t)).collect())
            .collect();

        // A title listed twice stays with its first group.
        let mut exact = HashMap::new();
        for (index, group) in normalized.iter().enumerate() {
            for title in group {
                exact.entry(title.clone()).or_insert(index);
            }
        }

        Self {
            groups,
            normalized,
            exact,
        }
    }

    /// Index of the group matching an already normalized title.
    pub fn find_group(&self, normalized_title: &str) -> Option<usize> {
        if normalized_title.is_empty() {
            return None;
        }

        if let Some(&index) = self.exact.get(normalized_title) {
            return Some(index);
        }

        self.normalized
            .iter()
            .position(|group| group.iter().any(|member| relates(normalized_title, member)))
    }

    /// Titles interchangeable with `title`, or just `title` itself when no
    /// group matches.
    pub fn resolve(&self, title: &str) -> Vec<String> {
        match self.find_group(&normalize(title)) {
            Some(index) => self.groups[index].clone(),
            None => vec![title.to_string()],
        }
    }

    /// Lowercased members of the group for `normalized_title`, falling back to
    /// the title alone.
    pub fn normalized_group<'a>(&'a self, normalized_title: &'a str) -> Vec<&'a str> {
        match self.find_group(normalized_title) {
            Some(index) => self.normalized[index].iter().map(String::as_str).collect(),
            None => vec![normalized_title],
        }
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for SimilarityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_table() -> &'static SimilarityTable {
    static TABLE: OnceLock<SimilarityTable> = OnceLock::new();
    TABLE.get_or_init(SimilarityTable::builtin)
}

/// Resolve a title against the built-in table.
pub fn resolve_similarity_group(title: &str) -> Vec<String> {
    builtin_table().resolve(title)
}
