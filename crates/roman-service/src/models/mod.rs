//! Roman service models.
//!
//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /romannumeral`.
///
/// `query` stays textual so the handler can distinguish a missing
/// parameter from a malformed number and echo the input as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionQuery {
    /// The number to convert, unparsed.
    pub query: Option<String>,
}

/// Successful conversion response.
///
/// ## Example Response
///
/// ```json
/// {
///   "input": "42",
///   "output": "XLII"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The query parameter exactly as received.
    pub input: String,

    /// The Roman numeral.
    pub output: String,
}
