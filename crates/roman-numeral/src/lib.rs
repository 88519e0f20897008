//! Integer to Roman numeral conversion.
//!
//! The conversion is a greedy walk over a fixed table of 13 value/symbol
//! pairs (seven additive symbols plus the six subtractive pairs). It is
//! defined for the closed range [`MIN_VALUE`, `MAX_VALUE`]; anything else is
//! rejected with [`NumeralError::OutOfRange`] rather than producing a
//! degenerate numeral.
//!
//! ```
//! assert_eq!(roman_numeral::convert(42).as_deref(), Ok("XLII"));
//! assert!(roman_numeral::convert(0).is_err());
//! ```

#![warn(clippy::pedantic)]

/// Module for conversion error types
pub mod error;

/// Module for the symbol table and greedy converter
pub mod numeral;

pub use error::NumeralError;
pub use numeral::{check_range, convert, MAX_VALUE, MIN_VALUE, SYMBOL_TABLE};
