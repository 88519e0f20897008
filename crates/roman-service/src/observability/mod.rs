//! Observability module for the Roman service.
//!
//! Provides logging, metrics and trace export setup plus the recording
//! helpers used by handlers and middleware.
//!
//! # Privacy by Default
//!
//! Handlers use `#[instrument(skip_all)]` and record only bounded, explicit
//! fields. The raw query text is never a metric label.

pub mod logging;
pub mod metrics;
pub mod otel;

pub use logging::{init_logging, LogGuard, LoggingConfig};
pub use metrics::{init_metrics_recorder, record_conversion, record_http_request};
