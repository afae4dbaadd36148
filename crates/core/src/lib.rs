//! # assetsearch-core
//!
//! Pure hybrid ranking engine for natural-language search over a catalog of
//! digital assets. Given a query string and an over-fetched set of vector-index
//! matches, it computes fuzzy text-overlap signals, blends them with the vector
//! similarity score, and produces a ranked, truncated, annotated result list.
//!
//! This crate has no async, network, or I/O dependencies — every function is a
//! pure computation over already-fetched data, suitable for embedding directly
//! in the HTTP server or in offline evaluation tools.

/// Candidate types: one vector-index match plus its free-text metadata.
pub mod candidate;
/// Global configuration constants: blend weights, limits, and tuning parameters.
pub mod config;
/// Embedding usage cost accounting.
pub mod cost;
/// Hybrid scoring and reranking: tokenization, overlap ratios, weighted blend.
pub mod rank;
