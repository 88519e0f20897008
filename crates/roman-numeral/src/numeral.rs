//! Greedy integer to Roman numeral conversion.

use crate::error::{NumeralError, Result};

/// Smallest value with a Roman numeral representation.
pub const MIN_VALUE: u32 = 1;

/// Largest value representable without vinculum notation.
pub const MAX_VALUE: u32 = 3999;

/// Longest numeral produced for any value in range ("MMMDCCCLXXXVIII").
const MAX_NUMERAL_LEN: usize = 15;

/// Value/symbol pairs, strictly descending by value.
///
/// The six subtractive pairs sit between the additive symbols they
/// abbreviate, which is what makes the greedy choice unique.
pub const SYMBOL_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Validate that `value` can be converted.
///
/// Callers holding a wider or signed integer (for example one parsed from
/// user input) use this to reject bad values before calling [`convert`].
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] if `value` is outside
/// [`MIN_VALUE`]..=[`MAX_VALUE`].
pub fn check_range(value: i64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
        .ok_or(NumeralError::OutOfRange { value })
}

/// Convert `value` to its Roman numeral representation.
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] if `value` is outside
/// [`MIN_VALUE`]..=[`MAX_VALUE`]. Zero is rejected rather than mapped to an
/// empty string.
pub fn convert(value: u32) -> Result<String> {
    let mut remaining = check_range(i64::from(value))?;
    let mut numeral = String::with_capacity(MAX_NUMERAL_LEN);

    for &(weight, symbol) in &SYMBOL_TABLE {
        while remaining >= weight {
            numeral.push_str(symbol);
            remaining -= weight;
        }
    }

    Ok(numeral)
}
