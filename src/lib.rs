//! Candidate/job matching library
//!
//! Scores how well a candidate profile fits job postings and ranks the
//! postings that clear the match threshold.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{MatchError, Result};
pub use matching::MatchEngine;
