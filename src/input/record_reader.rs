//! Record parsing for the supported file formats

use crate::error::{MatchError, Result};
use crate::matching::model::JobAttributes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

pub trait RecordReader {
    fn read<T: DeserializeOwned>(&self, content: &str, source: &Path) -> Result<T>;
}

pub struct JsonReader;

impl RecordReader for JsonReader {
    fn read<T: DeserializeOwned>(&self, content: &str, source: &Path) -> Result<T> {
        serde_json::from_str(content).map_err(|e| {
            MatchError::Parse(format!("Failed to parse JSON '{}': {}", source.display(), e))
        })
    }
}

pub struct TomlReader;

impl RecordReader for TomlReader {
    fn read<T: DeserializeOwned>(&self, content: &str, source: &Path) -> Result<T> {
        toml::from_str(content).map_err(|e| {
            MatchError::Parse(format!("Failed to parse TOML '{}': {}", source.display(), e))
        })
    }
}

/// A job file holds either a bare list or a `jobs` table/array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobListing {
    List(Vec<JobAttributes>),
    Wrapped { jobs: Vec<JobAttributes> },
}

impl JobListing {
    pub fn into_jobs(self) -> Vec<JobAttributes> {
        match self {
            JobListing::List(jobs) | JobListing::Wrapped { jobs } => jobs,
        }
    }
}
