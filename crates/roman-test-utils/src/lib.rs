//! # Roman Service Test Utilities
//!
//! Shared test utilities for the Roman numeral service.
//!
//! This crate provides:
//! - Server test harness (`TestRomanServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roman_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestRomanServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/romannumeral?query=42", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;
