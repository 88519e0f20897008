//! Roman Numeral Service Library
//!
//! An HTTP service converting integers in 1..=3999 to Roman numerals,
//! with a single-page front end and the usual operational endpoints.
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> roman_numeral::convert
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - HTTP metrics middleware
//! - `models` - Request and response bodies
//! - `observability` - Logging, metrics and trace export
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod routes;
