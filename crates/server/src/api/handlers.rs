//! HTTP request handlers and shared application state.
//!
//! Each public async function corresponds to an API route registered in
//! [`create_router`](crate::api::create_router). Handlers validate input at
//! the boundary and delegate to the [`SearchService`](crate::search::SearchService),
//! returning JSON responses or [`ApiError`](crate::api::errors::ApiError)
//! on failure.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::search::SearchService;
use assetsearch_core::config;
use axum::extract::State;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor. Read-only after initialization.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SearchService>,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

/// `POST /search` — searches the asset catalog with a natural-language query.
///
/// Validates `top_k` and query length, then runs embed → over-fetched
/// vector lookup → hybrid rerank. Collaborator failures surface as 500
/// with the cause in the error body.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if req.top_k == 0 || req.top_k > config::MAX_TOP_K {
        return Err(ApiError::BadRequest(format!(
            "top_k must be 1-{}",
            config::MAX_TOP_K
        )));
    }
    if req.query.len() > config::MAX_QUERY_LEN {
        return Err(ApiError::BadRequest(format!(
            "Query exceeds maximum length of {} bytes",
            config::MAX_QUERY_LEN
        )));
    }

    let outcome = state
        .service
        .search(&req.query, req.top_k)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    metrics::record_search(outcome.assets.len());
    metrics::record_embedding_tokens(outcome.total_tokens);

    Ok(Json(SearchResponse {
        assets: outcome.assets,
        total_cost_usd: outcome.total_cost_usd,
        total_tokens: outcome.total_tokens,
    }))
}

/// `GET /health` — always reports healthy.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /metrics` — returns Prometheus-formatted metrics.
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}
