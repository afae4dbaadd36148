//! Embedding usage cost accounting.

/// Computes the USD cost of an embedding call from its token usage.
///
/// `cost_per_token` is a fixed constant configured for the embedding model
/// in use (see [`crate::config::COST_PER_TOKEN`]), not derived at runtime.
pub fn embedding_cost_usd(total_tokens: u32, cost_per_token: f64) -> f64 {
    total_tokens as f64 * cost_per_token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn test_cost_for_known_usage() {
        let cost = embedding_cost_usd(12, config::COST_PER_TOKEN);
        assert!((cost - 0.000_000_24).abs() < 1e-12);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        assert_eq!(embedding_cost_usd(0, config::COST_PER_TOKEN), 0.0);
    }
}
