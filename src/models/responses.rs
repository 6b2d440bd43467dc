use serde::{Deserialize, Serialize};
use crate::models::domain::{ConstraintSet, ScoredBreed};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub cached: bool,
    pub query: String,
    #[serde(rename = "extractedConstraints")]
    pub extracted_constraints: ConstraintSet,
    pub results: Vec<ScoredBreed>,
    pub total: usize,
    #[serde(rename = "matchedBreeds")]
    pub matched_breeds: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "cacheEntries")]
    pub cache_entries: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
