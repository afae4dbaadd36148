//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling
//! via Axum. Scored assets serialize directly from the core crate's
//! [`ScoredAsset`](assetsearch_core::rank::ScoredAsset).

use assetsearch_core::config;
use assetsearch_core::rank::ScoredAsset;
use serde::{Deserialize, Serialize};

/// Request body for `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    config::DEFAULT_TOP_K
}

/// Response body for `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub assets: Vec<ScoredAsset>,
    pub total_cost_usd: f64,
    pub total_tokens: u32,
}

/// Response body for `GET /health`.
///
/// `status` is always `"healthy"`; the version and uptime fields are
/// informational extras.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
