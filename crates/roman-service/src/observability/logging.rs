//! Logging and tracing subscriber setup.
//!
//! Installs a `tracing` registry with:
//! - an `EnvFilter` (`RUST_LOG` takes precedence over the default)
//! - a stdout `fmt` layer, text or JSON
//! - an optional daily-rotated file layer with a non-blocking writer
//! - an optional OpenTelemetry layer exporting spans over OTLP

use std::path::PathBuf;

use opentelemetry_sdk::trace::TracerProvider;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::otel::{init_tracer_provider, otel_layer};
use crate::config::{Config, LogFormat};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "roman_service=info,tower_http=info";

/// Base name for rotated log files.
const LOG_FILE_NAME: &str = "roman-service.log";

/// Configuration for the logging subsystem.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output logs in JSON format for structured logging
    pub json_format: bool,
    /// Directory for log files (None = no file logging)
    pub log_dir: Option<String>,
    /// OTLP collector endpoint (None = no span export)
    pub otlp_endpoint: Option<String>,
    /// `service.name` resource attribute for exported spans
    pub service_name: String,
}

impl From<&Config> for LoggingConfig {
    fn from(config: &Config) -> Self {
        Self {
            json_format: config.log_format == LogFormat::Json,
            log_dir: config.log_dir.clone(),
            otlp_endpoint: config.otlp_endpoint.clone(),
            service_name: config.service_name.clone(),
        }
    }
}

/// Keeps the file writer thread and tracer provider alive.
///
/// Hold it for the lifetime of the application. Dropping it flushes
/// buffered log lines and pending spans.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
    tracer_provider: Option<TracerProvider>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shut down tracer provider: {}", e);
            }
        }
    }
}

/// Initialize the logging subsystem.
///
/// Setup problems with the optional sinks (log directory, OTLP exporter) are
/// reported on stderr and the sink is skipped; stdout logging always works.
///
/// Must be called from within a tokio runtime when an OTLP endpoint is set.
pub fn init_logging(config: &LoggingConfig) -> LogGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let mut layers = Vec::with_capacity(3);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true);

    let stdout_layer = if config.json_format {
        stdout_layer.json().flatten_event(true).boxed()
    } else {
        stdout_layer.boxed()
    };

    layers.push(stdout_layer);

    let mut file_guard = None;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = PathBuf::from(log_dir);

        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                file_guard = Some(guard);

                let file_layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(non_blocking);

                let file_layer = if config.json_format {
                    file_layer.json().flatten_event(true).boxed()
                } else {
                    file_layer.boxed()
                };

                layers.push(file_layer);
            }
            Err(e) => eprintln!("Failed to create log directory: {}", e),
        }
    }

    let mut tracer_provider = None;

    if let Some(endpoint) = &config.otlp_endpoint {
        match init_tracer_provider(&config.service_name, endpoint) {
            Ok(provider) => {
                layers.push(otel_layer(&provider));
                tracer_provider = Some(provider);
            }
            Err(e) => eprintln!("Failed to initialize OpenTelemetry: {}", e),
        }
    }

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init();

    LogGuard {
        _file_guard: file_guard,
        tracer_provider,
    }
}
