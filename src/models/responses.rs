use serde::{Deserialize, Serialize};
use crate::core::distance::format_distance;
use crate::models::domain::{RankedResult, Venue};

/// Outcome label so clients can tell "nothing asked" from "nothing found"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    NoQuery,
    NoMatch,
    Ok,
}

/// Which reference point distances were measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    User,
    Fallback,
}

/// Ranked venue as sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    #[serde(flatten)]
    pub venue: Venue,
    pub distance: f64,
    pub distance_label: String,
}

impl From<RankedResult> for ResultView {
    fn from(result: RankedResult) -> Self {
        Self {
            distance_label: format_distance(result.distance),
            distance: result.distance,
            venue: result.venue,
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: SearchStatus,
    pub query: String,
    /// Chain brand the query was expanded from, if any
    pub chain: Option<String>,
    pub reference: ReferenceKind,
    pub total_results: usize,
    pub results: Vec<ResultView>,
}

/// Response for the nearby endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub max_miles: f64,
    pub limit: usize,
    pub total_results: usize,
    pub results: Vec<ResultView>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub venues: usize,
    pub chains: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
