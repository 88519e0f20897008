//! Metrics definitions for the Roman service.
//!
//! All metrics follow Prometheus naming conventions:
//! - `roman_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `method`: 7 values max (GET, POST, PATCH, DELETE, PUT, HEAD, OPTIONS)
//! - `endpoint`: 5 values (known paths plus `/other`)
//! - `status`: 3 values (success, error, timeout)
//! - `outcome`: 4 values (success, invalid_format, out_of_range, missing_parameter)

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics recorder and return the handle
/// for serving metrics via HTTP.
///
/// Must be called before any metrics are recorded.
///
/// # Errors
///
/// Returns error if Prometheus recorder fails to install (e.g., already installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        // HTTP request buckets
        .set_buckets_for_metric(
            Matcher::Prefix("roman_http_request".to_string()),
            &[
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000,
            ],
        )
        .map_err(|e| format!("Failed to set HTTP request buckets: {e}"))?
        // Conversion is pure CPU work, so the interesting range is microseconds
        .set_buckets_for_metric(
            Matcher::Prefix("roman_conversion".to_string()),
            &[
                0.000_001, 0.000_005, 0.000_010, 0.000_050, 0.000_100, 0.000_500, 0.001,
            ],
        )
        .map_err(|e| format!("Failed to set conversion buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

// ============================================================================
// HTTP Request Metrics
// ============================================================================

/// Record HTTP request completion
///
/// Metric: `roman_http_requests_total`, `roman_http_request_duration_seconds`
/// Labels: `method`, `endpoint`, `status`
///
/// This captures ALL HTTP responses including framework-level errors like
/// 404 Not Found and 405 Method Not Allowed.
pub fn record_http_request(method: &str, endpoint: &str, status_code: u16, duration: Duration) {
    let normalized_endpoint = normalize_endpoint(endpoint);
    let status = categorize_status_code(status_code);

    histogram!("roman_http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint,
        "status" => status
    )
    .record(duration.as_secs_f64());

    counter!("roman_http_requests_total",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint,
        "status_code" => status_code.to_string()
    )
    .increment(1);
}

/// Categorize HTTP status code into success/error/timeout
fn categorize_status_code(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "success",
        408 | 504 => "timeout",
        _ => "error",
    }
}

/// Normalize endpoint path to prevent label cardinality explosion.
///
/// Unknown paths collapse to `/other`.
fn normalize_endpoint(path: &str) -> &'static str {
    match path {
        "/" => "/",
        "/health" => "/health",
        "/metrics" => "/metrics",
        "/romannumeral" => "/romannumeral",
        _ => "/other",
    }
}

// ============================================================================
// Conversion Metrics
// ============================================================================

/// Record a conversion request outcome
///
/// Metric: `roman_conversions_total`, `roman_conversion_duration_seconds`
/// Labels: `outcome`
///
/// The duration covers parsing, validation and conversion, but not
/// serialization of the response.
pub fn record_conversion(outcome: &'static str, duration: Duration) {
    histogram!("roman_conversion_duration_seconds",
        "outcome" => outcome
    )
    .record(duration.as_secs_f64());

    counter!("roman_conversions_total",
        "outcome" => outcome
    )
    .increment(1);
}
