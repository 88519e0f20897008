//! Single-page front end.

use axum::response::Html;

/// Front end markup, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Handler for GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_calls_conversion_endpoint() {
        let Html(body) = index().await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("/romannumeral?query="));
    }
}
