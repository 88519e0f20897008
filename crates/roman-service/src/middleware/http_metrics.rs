//! Request metrics for every route the service answers.
//!
//! Wraps `/`, `/romannumeral`, `/health` and `/metrics`, and also sees the
//! responses axum and tower-http produce without reaching a handler: 404
//! for unknown paths, 405 for non-GET conversion requests, 408 from the
//! request timeout and CORS preflight answers.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::observability::metrics::record_http_request;

/// Record `roman_http_requests_total` and
/// `roman_http_request_duration_seconds` for one request.
///
/// Paths are normalized by `record_http_request`, so arbitrary URLs land
/// in the `/other` endpoint label.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status_code = response.status().as_u16();
    record_http_request(&method, &path, status_code, duration);

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use tower::ServiceExt;

    async fn handler_200() -> &'static str {
        "OK"
    }

    async fn handler_400() -> (StatusCode, &'static str) {
        (StatusCode::BAD_REQUEST, "Bad")
    }

    fn test_app() -> Router {
        Router::new()
            .route("/romannumeral", get(handler_200))
            .route("/health", get(handler_400))
            .layer(middleware::from_fn(http_metrics_middleware))
    }

    #[tokio::test]
    async fn test_middleware_passes_success_through() {
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/romannumeral?query=1")
            .body(Body::empty())
            .expect("request builder should succeed");

        let response = test_app()
            .oneshot(request)
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_middleware_passes_error_through() {
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .expect("request builder should succeed");

        let response = test_app()
            .oneshot(request)
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_middleware_passes_not_found_through() {
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/nonexistent")
            .body(Body::empty())
            .expect("request builder should succeed");

        let response = test_app()
            .oneshot(request)
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_middleware_records_status_code_label() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        // Local recorders are thread-scoped, so drive the request on a
        // current-thread runtime inside the recorder scope.
        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime should build");
            runtime.block_on(async {
                let request = HttpRequest::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .expect("request builder should succeed");
                let _ = test_app().oneshot(request).await;
            });
        });

        let recorded = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .any(|(key, _, _, value)| {
                key.key().name() == "roman_http_requests_total"
                    && key
                        .key()
                        .labels()
                        .any(|l| l.key() == "status_code" && l.value() == "404")
                    && matches!(value, DebugValue::Counter(1))
            });
        assert!(recorded, "expected a 404 request counter");
    }
}
