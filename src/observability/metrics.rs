//! Metrics collection.
//!
//! # Metrics
//! - `api_call_requests_total` (counter): calls by method and outcome
//! - `api_call_duration_seconds` (histogram): call latency by method
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; without an installed recorder
//!   every call is a no-op
//! - Outcome labels: `ok`, `not_ok`, `timeout`, `canceled`, `unreachable`,
//!   `decode_error`

use std::time::Instant;

/// Record one finished call.
pub fn record_call(method: &str, outcome: &'static str, start: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "api_call_requests_total",
        "method" => method.clone(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("api_call_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
