use serde::{Deserialize, Serialize};
use crate::models::domain::NearbyResult;

/// Response for nearby endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub places: Vec<NearbyResult>,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "geocodedCandidates")]
    pub geocoded_candidates: usize,
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

/// Cache invalidation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheInvalidationResponse {
    pub success: bool,
    pub pattern: String,
}
