//! Roman service error types.
//!
//! All errors map to appropriate HTTP status codes via the `IntoResponse` impl.
//! Every variant is a client error; the converter has no failure mode beyond
//! its range check.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roman_numeral::{NumeralError, MAX_VALUE, MIN_VALUE};
use serde::Serialize;
use thiserror::Error;

/// Roman service error type.
///
/// Maps to appropriate HTTP status codes:
/// - MissingParameter, InvalidNumberFormat, OutOfRange: 400 Bad Request
#[derive(Debug, Error)]
pub enum RomanError {
    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid number format")]
    InvalidNumberFormat,

    #[error("Number out of range")]
    OutOfRange,
}

impl RomanError {
    /// Returns the HTTP status code for this error (for metrics recording).
    pub fn status_code(&self) -> u16 {
        match self {
            RomanError::MissingParameter(_)
            | RomanError::InvalidNumberFormat
            | RomanError::OutOfRange => 400,
        }
    }

    /// Bounded label describing the error, shared with conversion metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RomanError::MissingParameter(_) => "missing_parameter",
            RomanError::InvalidNumberFormat => "invalid_format",
            RomanError::OutOfRange => "out_of_range",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for RomanError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            RomanError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                "MISSING_PARAMETER",
                format!("Missing required query parameter '{}'", name),
            ),
            RomanError::InvalidNumberFormat => (
                StatusCode::BAD_REQUEST,
                "INVALID_NUMBER_FORMAT",
                "Invalid number format".to_string(),
            ),
            RomanError::OutOfRange => (
                StatusCode::BAD_REQUEST,
                "OUT_OF_RANGE",
                format!("Number must be between {} and {}", MIN_VALUE, MAX_VALUE),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Convert converter errors to RomanError
impl From<NumeralError> for RomanError {
    fn from(err: NumeralError) -> Self {
        match err {
            NumeralError::OutOfRange { .. } => RomanError::OutOfRange,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    // Helper function to read the response body as JSON
    async fn read_body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_display_missing_parameter() {
        let error = RomanError::MissingParameter("query".to_string());
        assert_eq!(
            format!("{}", error),
            "Missing required query parameter: query"
        );
    }

    #[test]
    fn test_display_invalid_number_format() {
        assert_eq!(
            format!("{}", RomanError::InvalidNumberFormat),
            "Invalid number format"
        );
    }

    #[test]
    fn test_display_out_of_range() {
        assert_eq!(format!("{}", RomanError::OutOfRange), "Number out of range");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RomanError::MissingParameter("query".to_string()).status_code(),
            400
        );
        assert_eq!(RomanError::InvalidNumberFormat.status_code(), 400);
        assert_eq!(RomanError::OutOfRange.status_code(), 400);
    }

    #[test]
    fn test_from_numeral_error() {
        let error: RomanError = NumeralError::OutOfRange { value: 0 }.into();
        assert!(matches!(error, RomanError::OutOfRange));
    }

    #[tokio::test]
    async fn test_into_response_missing_parameter() {
        let response = RomanError::MissingParameter("query".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "MISSING_PARAMETER");
        assert_eq!(
            body_json["error"]["message"],
            "Missing required query parameter 'query'"
        );
    }

    #[tokio::test]
    async fn test_into_response_invalid_number_format() {
        let response = RomanError::InvalidNumberFormat.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "INVALID_NUMBER_FORMAT");
        assert_eq!(body_json["error"]["message"], "Invalid number format");
    }

    #[tokio::test]
    async fn test_into_response_out_of_range() {
        let response = RomanError::OutOfRange.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "OUT_OF_RANGE");
        assert_eq!(
            body_json["error"]["message"],
            "Number must be between 1 and 3999"
        );
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(
            RomanError::MissingParameter("query".to_string()).outcome(),
            "missing_parameter"
        );
        assert_eq!(RomanError::InvalidNumberFormat.outcome(), "invalid_format");
        assert_eq!(RomanError::OutOfRange.outcome(), "out_of_range");
    }
}
