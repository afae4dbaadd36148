//! Scored asset types for reranked search results.

use crate::config;
use serde::Serialize;
use std::collections::BTreeSet;

/// Blend weights for the final score.
///
/// The defaults encode the tuned behavior of the production system and sum
/// to exactly 1.00, with vector similarity dominating and the text-overlap
/// signals ordered tag > combined > description > scene. Callers may
/// substitute their own weights for experimentation, but the defaults
/// should not be altered without evidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankWeights {
    /// Weight for the vector similarity score.
    pub vector: f32,
    /// Weight for the tag overlap ratio.
    pub tag: f32,
    /// Weight for the combined-text overlap ratio.
    pub combined: f32,
    /// Weight for the description overlap ratio.
    pub description: f32,
    /// Weight for the scene-type overlap ratio.
    pub scene: f32,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            vector: config::VECTOR_WEIGHT,
            tag: config::TAG_WEIGHT,
            combined: config::COMBINED_WEIGHT,
            description: config::DESCRIPTION_WEIGHT,
            scene: config::SCENE_WEIGHT,
        }
    }
}

impl RankWeights {
    /// Sum of all five weights.
    pub fn sum(&self) -> f32 {
        self.vector + self.tag + self.combined + self.description + self.scene
    }
}

/// Explainability breakdown attached to every returned asset.
///
/// Overlap scores are rounded to two decimal places for display; the
/// unrounded values feed the final score and are carried on
/// [`ScoredAsset`] directly.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    /// Tag overlap ratio, rounded to 2 decimals.
    pub tag_score: f32,
    /// Description overlap ratio, rounded to 2 decimals.
    pub description_score: f32,
    /// Combined-text overlap ratio, rounded to 2 decimals.
    pub combined_score: f32,
    /// Scene-type overlap ratio, rounded to 2 decimals.
    pub scene_score: f32,
    /// The full deduplicated query word set.
    pub query_words: BTreeSet<String>,
    /// Query words that matched the asset's tag tokens. Always a subset of
    /// `query_words`.
    pub tag_hits: BTreeSet<String>,
}

/// One reranked search result.
///
/// Identity and display fields are copied from the source candidate;
/// `final_score` is the weighted blend of `vector_score` and the four
/// overlap scores. Not bounded to `[0, 1]` in general, but practically
/// close to it since the weights sum to 1 and component scores are in
/// `[0, 1]`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAsset {
    /// Opaque asset identifier, copied from the candidate.
    pub id: String,
    /// Canonical asset page URL: configured base URL + id.
    pub asset_url: String,
    /// Display image URL, when present in the metadata.
    pub image_url: Option<String>,
    /// Tag list, copied from the candidate.
    pub tags: Vec<String>,
    /// Description, copied from the candidate.
    pub description: String,
    /// Vector similarity score, copied verbatim.
    pub vector_score: f32,
    /// Tag overlap ratio in `[0, 1]`.
    pub tag_score: f32,
    /// Description overlap ratio in `[0, 1]`.
    pub description_score: f32,
    /// Combined-text overlap ratio in `[0, 1]`.
    pub combined_score: f32,
    /// Scene-type overlap ratio in `[0, 1]`.
    pub scene_score: f32,
    /// Weighted blend of all five signals; sort key for the result list.
    pub final_score: f32,
    /// Explainability breakdown.
    pub why: ScoreBreakdown,
}
