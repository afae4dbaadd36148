//! Hybrid scoring and reranking.
//!
//! Combines the vector similarity score of each candidate with four fuzzy
//! text-overlap signals (tags, description, combined text, scene type) into
//! a single final score, sorts descending, truncates to the requested size,
//! and attaches an explainability breakdown per asset.
//!
//! ```text
//! query text ──▶ tokenize ──▶ query word set
//!                                   │
//! candidates ──▶ per-field overlap ratios ──▶ weighted blend ──▶ sort/truncate
//!                                   │
//!                                   └──▶ per-asset "why" breakdown
//! ```

mod scorer;
mod tokenize;
mod types;

pub use scorer::{overlap_ratio, Ranker};
pub use tokenize::tokenize;
pub use types::{RankWeights, ScoreBreakdown, ScoredAsset};
