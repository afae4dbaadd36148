//! Candidate types for the hybrid ranker.
//!
//! A `Candidate` is one vector-index match before reranking: an opaque
//! identifier, the index's native similarity score, and free-text metadata.
//! Candidates are produced by the vector-index collaborator and are
//! immutable inputs — the ranker only derives new records from them.

use serde::{Deserialize, Serialize};

/// Free-text metadata attached to an asset in the vector index.
///
/// Every field is optional at the wire level. Missing fields deserialize to
/// zero-effect defaults (empty string / empty list), so scoring always
/// proceeds — a candidate with no tags scores 0.0 on the tag signal rather
/// than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Display URL for the asset image.
    pub image_url: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Pre-joined searchable text (tags + description + captions).
    #[serde(default)]
    pub combined_text: String,
    /// Scene classification label, when present.
    pub scene_type: Option<String>,
}

/// One vector-index match before reranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque unique identifier assigned at ingestion time.
    pub id: String,
    /// Similarity score in the index's native range, copied verbatim.
    pub vector_score: f32,
    /// Free-text metadata used for the overlap signals.
    #[serde(default)]
    pub metadata: AssetMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults_for_missing_fields() {
        let meta: AssetMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.image_url.is_none());
        assert!(meta.description.is_empty());
        assert!(meta.tags.is_empty());
        assert!(meta.combined_text.is_empty());
        assert!(meta.scene_type.is_none());
    }

    #[test]
    fn test_candidate_deserializes_without_metadata() {
        let c: Candidate = serde_json::from_str(r#"{"id":"a1","vector_score":0.8}"#).unwrap();
        assert_eq!(c.id, "a1");
        assert!(c.metadata.tags.is_empty());
    }
}
