//! Global configuration constants for asset search.
//!
//! All tuning parameters and input validation limits are defined here.
//! These are compile-time constants; runtime deployment settings (API keys,
//! index host, namespace, asset base URL) are handled via environment
//! variables and CLI arguments in the server crate.

/// Blend weight for the vector similarity score.
///
/// Vector similarity dominates the final score; the text-overlap signals
/// act as tie-breakers and boosts. The five weights sum to exactly 1.00.
pub const VECTOR_WEIGHT: f32 = 0.70;

/// Blend weight for the tag overlap score.
pub const TAG_WEIGHT: f32 = 0.12;

/// Blend weight for the combined-text overlap score.
pub const COMBINED_WEIGHT: f32 = 0.10;

/// Blend weight for the description overlap score.
pub const DESCRIPTION_WEIGHT: f32 = 0.05;

/// Blend weight for the scene-type overlap score.
pub const SCENE_WEIGHT: f32 = 0.03;

/// Over-fetch multiplier for the vector-index lookup.
///
/// The index is queried for `top_k * OVERFETCH_FACTOR` candidates so the
/// reranker has enough material to reorder and still deliver `top_k`
/// results after truncation. Hand-tuned constant; part of the contract
/// between the ranker and the vector-index collaborator.
pub const OVERFETCH_FACTOR: usize = 3;

/// Default number of results per search request.
pub const DEFAULT_TOP_K: usize = 10;

/// Maximum number of results (`top_k`) per search request.
pub const MAX_TOP_K: usize = 1_000;

/// Maximum length of query text in bytes.
pub const MAX_QUERY_LEN: usize = 10_000;

/// Embedding model identifier.
///
/// Must match the model used to build the vector index, or similarity
/// scores are meaningless. This is a deployment invariant the service
/// cannot verify at runtime.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Embedding cost in USD per token ($0.02 per 1M tokens for
/// `text-embedding-3-small`).
pub const COST_PER_TOKEN: f64 = 0.000_000_02;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (1 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
