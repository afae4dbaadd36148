//! Runtime configuration loaded once at startup.
//!
//! Deployment settings come from environment variables, read exactly once
//! in `main` and carried in an explicit [`ServerConfig`]. The scoring
//! logic never reads ambient state — it receives everything it needs at
//! construction time.

use std::env;

/// Error raised when a required environment variable is absent or empty.
#[derive(Debug, thiserror::Error)]
#[error("missing required environment variable {0}")]
pub struct MissingEnvVar(pub &'static str);

/// Process-wide deployment configuration, read-only after initialization.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// API key for the embedding provider.
    pub openai_api_key: String,
    /// API key for the vector index.
    pub pinecone_api_key: String,
    /// Base URL of the vector index (per-index host, e.g.
    /// `https://my-index-abc123.svc.pinecone.io`).
    pub pinecone_index_host: String,
    /// Namespace within the index to query.
    pub pinecone_namespace: String,
    /// Prefix prepended to asset ids to form canonical asset URLs.
    pub asset_base_url: String,
}

impl ServerConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Required: `OPENAI_API_KEY`, `PINECONE_API_KEY`, `PINECONE_INDEX_HOST`,
    /// `ASSET_BASE_URL`. Optional: `PINECONE_NAMESPACE` (defaults to the
    /// index's default namespace).
    pub fn from_env() -> Result<Self, MissingEnvVar> {
        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            pinecone_api_key: required("PINECONE_API_KEY")?,
            pinecone_index_host: required("PINECONE_INDEX_HOST")?,
            pinecone_namespace: env::var("PINECONE_NAMESPACE").unwrap_or_default(),
            asset_base_url: required("ASSET_BASE_URL")?,
        })
    }
}

fn required(name: &'static str) -> Result<String, MissingEnvVar> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(MissingEnvVar(name)),
    }
}
