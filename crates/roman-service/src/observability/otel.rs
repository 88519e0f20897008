//! OpenTelemetry span export.
//!
//! Spans created through `tracing` are bridged into an OpenTelemetry tracer
//! and shipped to an OTLP/gRPC collector by a batch processor running on
//! the tokio runtime.

use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Config as TraceConfig, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Instrumentation scope name for spans emitted by this crate.
const TRACER_NAME: &str = "roman-service";

/// Build a tracer provider exporting to `endpoint`.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be constructed.
pub fn init_tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> Result<TracerProvider, TraceError> {
    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(TraceConfig::default().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ])))
        .install_batch(runtime::Tokio)
}

/// Build the `tracing` layer that forwards spans to `provider`.
pub fn otel_layer<S>(provider: &TracerProvider) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync + 'static,
{
    tracing_opentelemetry::layer()
        .with_tracer(provider.tracer(TRACER_NAME))
        .boxed()
}
