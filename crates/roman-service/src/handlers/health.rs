//! Health check handler.
//!
//! - `/health`: Liveness probe - returns OK if the process is running
//!
//! The service has no dependencies, so there is no separate readiness check.

/// Liveness probe handler.
///
/// Returns a simple "OK" response to indicate the process is running.
pub async fn health_check() -> &'static str {
    "OK"
}
