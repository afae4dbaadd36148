//! OpenAI embeddings client.
//!
//! Thin wrapper over `POST /v1/embeddings`. The model identifier must be
//! the exact one used to build the vector index — a deployment invariant
//! this client cannot verify.

use crate::providers::{Embedder, Embedding, ProviderError};
use assetsearch_core::config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Client for the OpenAI embeddings API.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
    usage: Usage,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: u32,
}

impl OpenAiEmbedder {
    /// Creates a client using the default endpoint and the configured
    /// embedding model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: config::EMBEDDING_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the API endpoint, for proxies or compatible servers.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                input: text,
                model: &self.model,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: "openai",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: EmbeddingsResponse = response.json().await?;
        let first = body
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed {
                provider: "openai",
                what: "embedding data",
            })?;

        Ok(Embedding {
            vector: first.embedding,
            total_tokens: body.usage.total_tokens,
        })
    }
}
