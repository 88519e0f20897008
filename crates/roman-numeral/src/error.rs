//! Error types for numeral conversion.

use thiserror::Error;

use crate::numeral::{MAX_VALUE, MIN_VALUE};

/// Errors returned by the converter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralError {
    /// The value lies outside the representable range.
    #[error("Value {value} is out of range: expected {}..={}", MIN_VALUE, MAX_VALUE)]
    OutOfRange {
        /// The rejected value, widened so negative inputs survive intact.
        value: i64,
    },
}

/// Result type alias using `NumeralError`
pub type Result<T> = std::result::Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let error = NumeralError::OutOfRange { value: 4000 };
        assert_eq!(
            format!("{error}"),
            "Value 4000 is out of range: expected 1..=3999"
        );
    }

    #[test]
    fn test_display_negative_value() {
        let error = NumeralError::OutOfRange { value: -7 };
        assert!(format!("{error}").starts_with("Value -7 is out of range"));
    }
}
