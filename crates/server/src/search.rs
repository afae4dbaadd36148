//! Search orchestration: embed → over-fetched index lookup → hybrid rank.
//!
//! One request is one linear unit of work with no shared mutable state.
//! The only blocking points are the two collaborator calls; everything
//! after them is pure computation in `assetsearch-core`.

use crate::providers::{Embedder, ProviderError, VectorIndex};
use assetsearch_core::config;
use assetsearch_core::cost::embedding_cost_usd;
use assetsearch_core::rank::{Ranker, ScoredAsset};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Result of one search call: ranked assets plus embedding usage accounting.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Ranked, truncated asset list (length ≤ requested `top_k`).
    pub assets: Vec<ScoredAsset>,
    /// USD cost of the embedding call.
    pub total_cost_usd: f64,
    /// Tokens billed for the embedding call.
    pub total_tokens: u32,
}

/// Orchestrates one search: embedding, vector lookup, reranking, logging.
pub struct SearchService {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
    ranker: Ranker,
    cost_per_token: f64,
}

impl SearchService {
    /// Creates a service with the configured cost-per-token constant.
    pub fn new(embedder: Arc<dyn Embedder>, index: Arc<dyn VectorIndex>, ranker: Ranker) -> Self {
        Self {
            embedder,
            index,
            ranker,
            cost_per_token: config::COST_PER_TOKEN,
        }
    }

    /// Runs one search end to end.
    ///
    /// The index lookup over-fetches by [`config::OVERFETCH_FACTOR`] so the
    /// reranker can reorder before truncating to `top_k`. A collaborator
    /// failure aborts the search before ranking and propagates to the
    /// caller; no retries are performed.
    pub async fn search(&self, query: &str, top_k: usize) -> Result<SearchOutcome, ProviderError> {
        let embedding = self.embedder.embed(query).await.map_err(|e| {
            error!(query, error = %e, "Embedding failed");
            e
        })?;
        let total_cost_usd = embedding_cost_usd(embedding.total_tokens, self.cost_per_token);

        let fetch_k = top_k.saturating_mul(config::OVERFETCH_FACTOR);
        let candidates = self.index.query(&embedding.vector, fetch_k).await.map_err(|e| {
            error!(query, error = %e, "Vector index query failed");
            e
        })?;

        let assets = self.ranker.rank(query, &candidates, top_k);

        // Logging is a side effect on the finished result, never
        // interleaved with scoring.
        info!(
            query,
            tokens = embedding.total_tokens,
            cost_usd = total_cost_usd,
            results = assets.len(),
            top_score = assets.first().map(|a| f64::from(a.final_score)),
            "Search completed"
        );
        for asset in &assets {
            debug!(
                id = %asset.id,
                vector = f64::from(asset.vector_score),
                tag = f64::from(asset.tag_score),
                combined = f64::from(asset.combined_score),
                description = f64::from(asset.description_score),
                scene = f64::from(asset.scene_score),
                final_score = f64::from(asset.final_score),
                "Signal breakdown"
            );
        }

        Ok(SearchOutcome {
            assets,
            total_cost_usd,
            total_tokens: embedding.total_tokens,
        })
    }
}
