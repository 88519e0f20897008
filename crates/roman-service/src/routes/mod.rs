//! HTTP routes for the Roman service.
//!
//! Defines the Axum router and its middleware stack.

use crate::config::{Config, CorsOrigins};
use crate::handlers;
use crate::middleware::http_metrics_middleware;
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/` - Single-page front end
/// - `/romannumeral?query={n}` - Integer to Roman numeral conversion
/// - `/health` - Liveness probe (simple "OK")
/// - `/metrics` - Prometheus metrics endpoint
/// - CORS for browser clients on other origins
/// - TraceLayer for request logging
/// - HTTP metrics middleware
/// - Configurable request timeout
///
/// The handlers are stateless; only the metrics route carries state.
pub fn build_routes(config: &Config, metrics_handle: PrometheusHandle) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/romannumeral", get(handlers::convert_number))
        .route("/health", get(handlers::health_check));

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    with_middleware(public_routes.merge(metrics_routes), config)
}

/// Wrap `router` in the service-wide middleware stack.
///
/// Layer order (bottom-to-top execution):
/// 1. TimeoutLayer - 408 once the configured timeout elapses (innermost)
/// 2. TraceLayer - Log request details
/// 3. CorsLayer - Answer preflight requests before they reach handlers
/// 4. http_metrics_middleware - Record ALL responses, timeouts included (outermost)
fn with_middleware(router: Router, config: &Config) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_seconds);

    router
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(middleware::from_fn(http_metrics_middleware))
}

/// Build the CORS layer from configured origins.
///
/// Origins are validated at config load, so unparsable entries cannot
/// occur here; they would simply be skipped.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
