//! Hybrid reranker: overlap ratios, weighted blend, sort, truncate.

use crate::candidate::Candidate;
use crate::rank::tokenize::tokenize;
use crate::rank::types::{RankWeights, ScoreBreakdown, ScoredAsset};
use std::collections::BTreeSet;

/// Fraction of query tokens also present in a field's token set.
///
/// Asymmetric on purpose: normalized by query length, not field length, so
/// a short query fully contained in a long tag list scores 1.0. The
/// denominator floor of 1 makes an empty query score 0.0 everywhere
/// instead of dividing by zero.
pub fn overlap_ratio(query_words: &BTreeSet<String>, field_words: &BTreeSet<String>) -> f32 {
    let hits = query_words.intersection(field_words).count();
    hits as f32 / query_words.len().max(1) as f32
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Hybrid reranker for vector-index candidates.
///
/// Holds the blend weights and the configured asset base URL. Ranking is a
/// pure function of `(query, candidates, top_k)` — no network, no I/O, no
/// ambient state — so it is unit-testable in isolation.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: RankWeights,
    base_url: String,
}

impl Ranker {
    /// Creates a ranker with the default blend weights.
    ///
    /// `base_url` is prepended verbatim to each candidate id to form
    /// `asset_url`; ids are passed through as-is without URL-safety checks.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_weights(base_url, RankWeights::default())
    }

    /// Creates a ranker with explicit blend weights.
    pub fn with_weights(base_url: impl Into<String>, weights: RankWeights) -> Self {
        Self {
            weights,
            base_url: base_url.into(),
        }
    }

    /// The blend weights in use.
    pub fn weights(&self) -> &RankWeights {
        &self.weights
    }

    /// Reranks an over-fetched candidate list against the query text.
    ///
    /// Tokenizes the query once, scores every candidate independently,
    /// stable-sorts descending by final score (ties keep the vector-index
    /// order), and truncates to `top_k`.
    ///
    /// Guarantees: output length is `min(top_k, candidates.len())`, output
    /// is sorted descending by `final_score`, and every asset's
    /// `why.tag_hits` is a subset of the query word set. Never errors:
    /// missing metadata degrades to zero-contribution scores.
    pub fn rank(&self, query_text: &str, candidates: &[Candidate], top_k: usize) -> Vec<ScoredAsset> {
        let query_words = tokenize(query_text);

        let mut scored: Vec<ScoredAsset> = candidates
            .iter()
            .map(|candidate| self.score_candidate(&query_words, candidate))
            .collect();

        // Stable sort: equal scores preserve candidate order.
        scored.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        scored
    }

    fn score_candidate(&self, query_words: &BTreeSet<String>, candidate: &Candidate) -> ScoredAsset {
        let meta = &candidate.metadata;

        let tag_words = tokenize(&meta.tags.join(" "));
        let description_words = tokenize(&meta.description);
        let combined_words = tokenize(&meta.combined_text);

        let tag_score = overlap_ratio(query_words, &tag_words);
        let description_score = overlap_ratio(query_words, &description_words);
        let combined_score = overlap_ratio(query_words, &combined_words);
        // Absent scene type scores zero without tokenizing anything.
        let scene_score = meta
            .scene_type
            .as_deref()
            .map(|scene| overlap_ratio(query_words, &tokenize(scene)))
            .unwrap_or(0.0);

        let w = &self.weights;
        let final_score = w.vector * candidate.vector_score
            + w.tag * tag_score
            + w.combined * combined_score
            + w.description * description_score
            + w.scene * scene_score;

        let tag_hits: BTreeSet<String> = query_words.intersection(&tag_words).cloned().collect();

        ScoredAsset {
            id: candidate.id.clone(),
            asset_url: format!("{}{}", self.base_url, candidate.id),
            image_url: meta.image_url.clone(),
            tags: meta.tags.clone(),
            description: meta.description.clone(),
            vector_score: candidate.vector_score,
            tag_score,
            description_score,
            combined_score,
            scene_score,
            final_score,
            why: ScoreBreakdown {
                tag_score: round2(tag_score),
                description_score: round2(description_score),
                combined_score: round2(combined_score),
                scene_score: round2(scene_score),
                query_words: query_words.clone(),
                tag_hits,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::AssetMetadata;
    use crate::config;

    const BASE_URL: &str = "https://assets.example.com/main/assets/";

    fn candidate(id: &str, vector_score: f32, metadata: AssetMetadata) -> Candidate {
        Candidate {
            id: id.to_string(),
            vector_score,
            metadata,
        }
    }

    fn tagged(id: &str, vector_score: f32, tags: &[&str]) -> Candidate {
        candidate(
            id,
            vector_score,
            AssetMetadata {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = RankWeights::default().sum();
        assert!((sum - 1.0).abs() < 1e-6, "weights sum to {sum}");
    }

    #[test]
    fn test_empty_query_final_score_is_weighted_vector_score() {
        let ranker = Ranker::new(BASE_URL);
        let results = ranker.rank("", &[tagged("a", 0.8, &["red", "car"])], 10);
        assert_eq!(results.len(), 1);
        let asset = &results[0];
        assert_eq!(asset.tag_score, 0.0);
        assert_eq!(asset.description_score, 0.0);
        assert_eq!(asset.combined_score, 0.0);
        assert_eq!(asset.scene_score, 0.0);
        assert!((asset.final_score - config::VECTOR_WEIGHT * 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_red_sports_car_scenario() {
        let ranker = Ranker::new(BASE_URL);
        let results = ranker.rank("red sports car", &[tagged("a1", 0.80, &["red", "car", "fast"])], 10);
        let asset = &results[0];

        // queryWords = {red, sports, car}; tagWords = {red, car, fast};
        // intersection = {red, car} => tag_score = 2/3.
        assert!((asset.tag_score - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(asset.description_score, 0.0);
        assert_eq!(asset.combined_score, 0.0);
        assert_eq!(asset.scene_score, 0.0);
        assert!((asset.final_score - 0.64).abs() < 1e-6);

        assert_eq!(asset.why.tag_score, 0.67);
        let hits: Vec<&str> = asset.why.tag_hits.iter().map(String::as_str).collect();
        assert_eq!(hits, vec!["car", "red"]);
        assert_eq!(asset.asset_url, format!("{BASE_URL}a1"));
    }

    #[test]
    fn test_output_sorted_descending_by_final_score() {
        let ranker = Ranker::new(BASE_URL);
        let candidates = vec![
            tagged("low", 0.2, &[]),
            tagged("high", 0.9, &[]),
            tagged("mid", 0.5, &[]),
        ];
        let results = ranker.rank("anything", &candidates, 10);
        for pair in results.windows(2) {
            assert!(pair[0].final_score >= pair[1].final_score);
        }
        assert_eq!(results[0].id, "high");
        assert_eq!(results[2].id, "low");
    }

    #[test]
    fn test_truncates_to_top_k() {
        let ranker = Ranker::new(BASE_URL);
        let candidates: Vec<Candidate> = (0..9)
            .map(|i| tagged(&format!("c{i}"), 0.1 * i as f32, &[]))
            .collect();
        assert_eq!(ranker.rank("q", &candidates, 3).len(), 3);
        assert_eq!(ranker.rank("q", &candidates, 100).len(), 9);
        assert!(ranker.rank("q", &[], 5).is_empty());
    }

    #[test]
    fn test_ties_preserve_candidate_order() {
        let ranker = Ranker::new(BASE_URL);
        let candidates = vec![
            tagged("first", 0.5, &[]),
            tagged("second", 0.5, &[]),
            tagged("third", 0.5, &[]),
        ];
        let ids: Vec<String> = ranker
            .rank("query", &candidates, 10)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tag_hits_subset_of_query_and_tag_words() {
        let ranker = Ranker::new(BASE_URL);
        let candidates = vec![
            tagged("a", 0.7, &["red", "car", "fast"]),
            tagged("b", 0.6, &["sunset", "beach"]),
        ];
        let results = ranker.rank("red beach day", &candidates, 10);
        for asset in &results {
            let tag_words = tokenize(&asset.tags.join(" "));
            for hit in &asset.why.tag_hits {
                assert!(asset.why.query_words.contains(hit));
                assert!(tag_words.contains(hit));
            }
        }
    }

    #[test]
    fn test_missing_tags_behaves_like_empty_tags() {
        let ranker = Ranker::new(BASE_URL);
        let absent = candidate("a", 0.5, AssetMetadata::default());
        let empty = candidate(
            "b",
            0.5,
            AssetMetadata {
                tags: Vec::new(),
                ..Default::default()
            },
        );
        let results = ranker.rank("red car", &[absent, empty], 10);
        assert_eq!(results[0].tag_score, results[1].tag_score);
        assert_eq!(results[0].final_score, results[1].final_score);
    }

    #[test]
    fn test_query_matching_is_case_insensitive() {
        let ranker = Ranker::new(BASE_URL);
        let results = ranker.rank("RED Car", &[tagged("a", 0.0, &["Red", "CAR"])], 10);
        assert!((results[0].tag_score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_query_contained_in_long_field_scores_full() {
        // Asymmetric normalization: query length, not field length.
        let ranker = Ranker::new(BASE_URL);
        let results = ranker.rank(
            "red",
            &[tagged("a", 0.0, &["red", "car", "fast", "sunset", "beach"])],
            10,
        );
        assert!((results[0].tag_score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scene_type_contributes_when_present() {
        let ranker = Ranker::new(BASE_URL);
        let with_scene = candidate(
            "a",
            0.0,
            AssetMetadata {
                scene_type: Some("beach".to_string()),
                ..Default::default()
            },
        );
        let results = ranker.rank("beach", &[with_scene], 10);
        assert!((results[0].scene_score - 1.0).abs() < 1e-6);
        assert!((results[0].final_score - config::SCENE_WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_ratio_empty_query_is_zero() {
        let empty = BTreeSet::new();
        let field: BTreeSet<String> = ["red".to_string()].into_iter().collect();
        assert_eq!(overlap_ratio(&empty, &field), 0.0);
    }

    #[test]
    fn test_custom_weights_change_blend() {
        let weights = RankWeights {
            vector: 1.0,
            tag: 0.0,
            combined: 0.0,
            description: 0.0,
            scene: 0.0,
        };
        let ranker = Ranker::with_weights(BASE_URL, weights);
        let results = ranker.rank("red", &[tagged("a", 0.42, &["red"])], 10);
        assert!((results[0].final_score - 0.42).abs() < 1e-6);
    }
}
