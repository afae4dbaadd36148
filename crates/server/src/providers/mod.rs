//! External collaborators: embedding provider and vector index.
//!
//! Both collaborators sit behind traits so the search service can be
//! exercised in tests with in-memory mocks. The real implementations are
//! thin reqwest clients with no retry logic — a failed call fails the
//! whole search.

/// OpenAI embeddings client.
pub mod openai;
/// Pinecone vector index client.
pub mod pinecone;

pub use openai::OpenAiEmbedder;
pub use pinecone::PineconeIndex;

use assetsearch_core::candidate::Candidate;
use async_trait::async_trait;

/// Failure from an external collaborator. Not recovered locally; the
/// caller logs it and surfaces a 500 at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    /// The provider answered 2xx but the payload was missing a required part.
    #[error("{provider} response missing {what}")]
    Malformed {
        provider: &'static str,
        what: &'static str,
    },
}

/// A query embedding with token-usage accounting.
#[derive(Debug, Clone)]
pub struct Embedding {
    /// Fixed-dimension vector representation of the input text.
    pub vector: Vec<f32>,
    /// Total tokens billed for the embedding call.
    pub total_tokens: u32,
}

/// Turns query text into a fixed-length vector and reports token usage.
///
/// Empty input is passed through as-is — its behavior is provider-defined
/// and deliberately not special-cased here.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError>;
}

/// Returns the nearest stored candidates to a query vector.
///
/// The namespace and metadata-inclusion flag are fixed per client; callers
/// only choose the fetch count (already over-fetched for reranking).
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query(&self, vector: &[f32], fetch_k: usize) -> Result<Vec<Candidate>, ProviderError>;
}
