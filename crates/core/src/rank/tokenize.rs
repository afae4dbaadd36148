//! Whitespace tokenizer for overlap scoring.
//!
//! Lowercases, splits on whitespace, and deduplicates into a set. No stop
//! word removal: overlap ratios must count every query word, so filtering
//! common words would change scores.

use std::collections::BTreeSet;

/// Tokenizes text into a deduplicated set of lowercase words.
///
/// Empty or whitespace-only text yields an empty set. A `BTreeSet` keeps
/// iteration order deterministic for explainability output.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
