//! Roman numeral conversion handler.
//!
//! Parses and range-checks the query parameter before the converter runs,
//! so invalid input never reaches it. Query strings axum cannot decode are
//! answered with the same JSON error body as malformed numbers.

use crate::errors::RomanError;
use crate::models::{ConversionQuery, ConversionResponse};
use crate::observability::metrics::record_conversion;
use axum::extract::{rejection::QueryRejection, Query};
use axum::Json;
use std::num::IntErrorKind;
use std::time::Instant;
use tracing::instrument;

/// Name of the query parameter carrying the number.
pub const QUERY_PARAM: &str = "query";

/// Handler for GET /romannumeral
///
/// ## Response
///
/// Returns 200 OK with the input echoed back as received:
///
/// ```json
/// {
///   "input": "1994",
///   "output": "MCMXCIV"
/// }
/// ```
///
/// Returns 400 Bad Request when the parameter is missing, is not a base-10
/// integer, or lies outside 1..=3999. An undecodable query string (such as
/// a repeated `query` parameter) counts as a malformed number.
#[instrument(skip_all, name = "roman.convert", fields(outcome))]
pub async fn convert_number(
    query: Result<Query<ConversionQuery>, QueryRejection>,
) -> Result<Json<ConversionResponse>, RomanError> {
    let start = Instant::now();
    let result = match query {
        Ok(Query(params)) => convert_query(params.query),
        Err(rejection) => {
            tracing::debug!(target: "roman.convert", error = %rejection, "Query string rejected");
            Err(RomanError::InvalidNumberFormat)
        }
    };

    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.outcome(),
    };
    record_conversion(outcome, start.elapsed());
    tracing::Span::current().record("outcome", outcome);

    match &result {
        Ok(response) => {
            tracing::debug!(target: "roman.convert", output = %response.output, "Converted number");
        }
        Err(e) => {
            tracing::debug!(target: "roman.convert", status = e.status_code(), error = %e, "Rejected conversion request");
        }
    }

    result.map(Json)
}

/// Validate the raw parameter and convert it.
fn convert_query(raw: Option<String>) -> Result<ConversionResponse, RomanError> {
    let input = raw.ok_or_else(|| RomanError::MissingParameter(QUERY_PARAM.to_string()))?;
    let value = parse_number(&input)?;
    let output = roman_numeral::convert(value)?;

    Ok(ConversionResponse { input, output })
}

/// Parse a base-10 integer and check it against the converter's range.
///
/// Integers too wide for `i64` are well-formed numbers, so they are reported
/// as out of range rather than as a format error.
fn parse_number(input: &str) -> Result<u32, RomanError> {
    let value: i64 = input.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RomanError::OutOfRange,
        _ => RomanError::InvalidNumberFormat,
    })?;

    Ok(roman_numeral::check_range(value)?)
}
