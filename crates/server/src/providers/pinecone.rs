//! Pinecone vector index client.
//!
//! Thin wrapper over `POST {index_host}/query`. Always requests metadata
//! so the ranker has the text fields it scores on; matches with missing
//! metadata fields deserialize to zero-effect defaults.

use crate::providers::{ProviderError, VectorIndex};
use assetsearch_core::candidate::{AssetMetadata, Candidate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Client for a single Pinecone index + namespace.
pub struct PineconeIndex {
    client: reqwest::Client,
    api_key: String,
    index_host: String,
    namespace: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct Match {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: AssetMetadata,
}

impl PineconeIndex {
    /// Creates a client bound to one index host and namespace.
    pub fn new(
        api_key: impl Into<String>,
        index_host: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            index_host: index_host.into(),
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn query(&self, vector: &[f32], fetch_k: usize) -> Result<Vec<Candidate>, ProviderError> {
        let url = format!("{}/query", self.index_host.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&QueryRequest {
                namespace: &self.namespace,
                vector,
                top_k: fetch_k,
                include_metadata: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: "pinecone",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: QueryResponse = response.json().await?;
        Ok(body
            .matches
            .into_iter()
            .map(|m| Candidate {
                id: m.id,
                vector_score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }
}
