use crate::error::RuntimeError;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` only when the conversion is exact.
///
/// ## Errors
/// Returns `Err(error)` if the magnitude exceeds [`MAX_SAFE_U64_INT`].
///
/// ## Example
/// ```
/// use brt::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(1_700_000_000, "too big"), Ok(1_700_000_000.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Parses the text of a number literal.
///
/// Accepts the spellings the lexer produces (`42`, `3.14`). Anything that
/// does not parse as a finite 64-bit float is rejected.
///
/// ## Errors
/// Returns [`RuntimeError::InvalidNumber`] carrying the literal text.
///
/// ## Example
/// ```
/// use brt::util::num::parse_number_literal;
///
/// assert_eq!(parse_number_literal("42", 1), Ok(42.0));
/// assert!(parse_number_literal("4x", 1).is_err());
/// ```
pub fn parse_number_literal(text: &str, line: usize) -> Result<f64, RuntimeError> {
    text.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| RuntimeError::InvalidNumber { literal: text.to_string(),
                                                     line })
}
