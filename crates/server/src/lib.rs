//! assetsearch-server — HTTP service for hybrid asset search.
//!
//! Thin Axum layer over the pure ranking engine in `assetsearch-core`.
//! The embedding model and the vector index are external collaborators
//! reached over HTTP; everything else is request-local computation.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
/// Runtime configuration loaded once at startup.
pub mod config;
/// External collaborators: embedding provider and vector index clients.
pub mod providers;
/// Search orchestration: embed → over-fetched lookup → rank.
pub mod search;
