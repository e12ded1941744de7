//! Input manager for loading candidate and job records

use crate::error::{MatchError, Result};
use crate::input::file_detector::FileType;
use crate::input::record_reader::{JobListing, JsonReader, RecordReader, TomlReader};
use crate::matching::model::{CandidateAttributes, JobAttributes};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn load_candidate(&mut self, path: &Path) -> Result<CandidateAttributes> {
        info!("Loading candidate profile: {}", path.display());
        self.load_record(path).await
    }

    /// Load a single job record.
    pub async fn load_job(&mut self, path: &Path) -> Result<JobAttributes> {
        info!("Loading job posting: {}", path.display());
        self.load_record(path).await
    }

    /// Load a list of job records.
    pub async fn load_jobs(&mut self, path: &Path) -> Result<Vec<JobAttributes>> {
        info!("Loading job postings: {}", path.display());
        let listing: JobListing = self.load_record(path).await?;
        let jobs = listing.into_jobs();
        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    async fn load_record<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read_content(path).await?;

        match file_type {
            FileType::Json => JsonReader.read(&content, path),
            FileType::Toml => TomlReader.read(&content, path),
            FileType::Unknown => Err(MatchError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    async fn read_content(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if let Some(cached) = self.cache.get(&path_str) {
            info!("Using cached content for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(MatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;

        self.cache.insert(path_str, content.clone());

        Ok(content)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                MatchError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
