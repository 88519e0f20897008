//! Roman service configuration.
//!
//! Configuration is loaded from environment variables. The OTLP endpoint is
//! redacted in Debug output since collector URLs can carry credentials.

use axum::http::HeaderValue;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default `service.name` reported in logs and spans.
pub const DEFAULT_SERVICE_NAME: &str = "roman-service";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default graceful shutdown drain period in seconds.
pub const DEFAULT_DRAIN_SECONDS: u64 = 5;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable text lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`).
    Any,
    /// An explicit allow-list, each entry a valid header value.
    List(Vec<String>),
}

/// Roman service configuration.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: SocketAddr,

    /// Service name for log and trace resource attributes.
    pub service_name: String,

    /// Origins allowed by the CORS layer (default: any).
    pub cors_allowed_origins: CorsOrigins,

    /// Per-request timeout in seconds (default: 30).
    pub request_timeout_seconds: u64,

    /// Seconds to keep serving in-flight requests after a shutdown signal.
    pub drain_seconds: u64,

    /// Log output format (default: text).
    pub log_format: LogFormat,

    /// Directory for daily-rotated log files. Unset disables file logging.
    pub log_dir: Option<String>,

    /// OTLP/gRPC collector endpoint. Unset disables span export.
    pub otlp_endpoint: Option<String>,
}

/// Custom Debug implementation that redacts the collector endpoint.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("service_name", &self.service_name)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("drain_seconds", &self.drain_seconds)
            .field("log_format", &self.log_format)
            .field("log_dir", &self.log_dir)
            .field(
                "otlp_endpoint",
                &self.otlp_endpoint.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid service name: {0}")]
    InvalidServiceName(String),

    #[error("Invalid CORS origin configuration: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid request timeout configuration: {0}")]
    InvalidRequestTimeout(String),

    #[error("Invalid drain period configuration: {0}")]
    InvalidDrainSeconds(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address_str = vars
            .get("BIND_ADDRESS")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_ADDRESS);
        let bind_address: SocketAddr = bind_address_str.parse().map_err(|e| {
            ConfigError::InvalidBindAddress(format!(
                "BIND_ADDRESS must be a socket address, got '{}': {}",
                bind_address_str, e
            ))
        })?;

        let service_name = vars
            .get("SERVICE_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        if service_name.trim().is_empty() {
            return Err(ConfigError::InvalidServiceName(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }

        let cors_allowed_origins = match vars.get("CORS_ALLOWED_ORIGINS") {
            Some(value) => parse_cors_origins(value)?,
            None => CorsOrigins::Any,
        };

        let request_timeout_seconds = if let Some(value_str) = vars.get("REQUEST_TIMEOUT_SECONDS")
        {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidRequestTimeout(format!(
                    "REQUEST_TIMEOUT_SECONDS must be a valid positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidRequestTimeout(
                    "REQUEST_TIMEOUT_SECONDS must be greater than 0".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        };

        let drain_seconds = if let Some(value_str) = vars.get("DRAIN_SECONDS") {
            value_str.parse().map_err(|e| {
                ConfigError::InvalidDrainSeconds(format!(
                    "DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?
        } else {
            DEFAULT_DRAIN_SECONDS
        };

        let log_format = match vars.get("LOG_FORMAT").map(|s| s.to_ascii_lowercase()) {
            None => LogFormat::Text,
            Some(s) if s == "text" => LogFormat::Text,
            Some(s) if s == "json" => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidLogFormat(format!(
                    "LOG_FORMAT must be 'text' or 'json', got '{}'",
                    other
                )))
            }
        };

        let log_dir = non_empty(vars.get("LOG_DIR"));
        let otlp_endpoint = non_empty(vars.get("OTEL_EXPORTER_OTLP_ENDPOINT"));

        Ok(Config {
            bind_address,
            service_name,
            cors_allowed_origins,
            request_timeout_seconds,
            drain_seconds,
            log_format,
            log_dir,
            otlp_endpoint,
        })
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

fn parse_cors_origins(value: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::InvalidCorsOrigin(
            "CORS_ALLOWED_ORIGINS must not be empty".to_string(),
        ));
    }

    if origins.iter().any(|o| o == "*") {
        return Ok(CorsOrigins::Any);
    }

    if let Some(bad) = origins.iter().find(|o| o.parse::<HeaderValue>().is_err()) {
        return Err(ConfigError::InvalidCorsOrigin(format!(
            "'{}' is not a valid origin header value",
            bad
        )));
    }

    Ok(CorsOrigins::List(origins))
}
