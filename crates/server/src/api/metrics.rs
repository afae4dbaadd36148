//! Prometheus metrics recording.

use metrics::{counter, histogram};
use std::time::Duration;

/// Records HTTP request metrics: increments `http_requests_total` and
/// records `http_request_duration_seconds`, labeled by method, path, and
/// status code.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one completed search, labeled by whether it returned results.
pub fn record_search(result_count: usize) {
    let outcome = if result_count > 0 { "hit" } else { "miss" };
    counter!("assetsearch_searches_total", "outcome" => outcome.to_string()).increment(1);
}

/// Records embedding token usage for cost tracking.
pub fn record_embedding_tokens(tokens: u32) {
    counter!("assetsearch_embedding_tokens_total").increment(tokens as u64);
}
