//! Candidate/job match scoring

pub mod aggregate;
pub mod engine;
pub mod model;
pub mod normalize;
pub mod ranking;
pub mod scorers;
pub mod similarity;

pub use engine::MatchEngine;
pub use model::{CandidateAttributes, JobAttributes, MatchBreakdown, MatchResult, ScoredJob};
pub use similarity::{resolve_similarity_group, SimilarityTable};
