//! Number parsing transforms.

use crate::pattern;

/// Parse the leading integer prefix of `input`.
///
/// Surrounding whitespace is trimmed and an optional sign is accepted;
/// anything after the digits is ignored, so `"42px"` parses as `42`.
/// Returns `None` when no digits lead the input or the value overflows
/// `i64`.
///
/// # Examples
///
/// ```rust
/// use medley::transform::number::parse_int;
///
/// assert_eq!(parse_int(" -42px "), Some(-42));
/// assert_eq!(parse_int("px42"), None);
/// ```
#[must_use]
pub fn parse_int(input: &str) -> Option<i64> {
    let prefix = pattern::INTEGER_PREFIX.find(input.trim())?;
    prefix.as_str().parse().ok()
}

/// [`parse_int`], falling back to `fallback` when parsing fails.
#[must_use]
pub fn parse_int_or(input: &str, fallback: i64) -> i64 {
    parse_int(input).unwrap_or(fallback)
}

/// Parse the whole of `input`, trimmed, as a floating-point number.
///
/// Unlike [`parse_int`] this accepts no trailing garbage; empty input is
/// `None`.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// [`parse_number`], falling back to `fallback` when parsing fails.
#[must_use]
pub fn parse_number_or(input: &str, fallback: f64) -> f64 {
    parse_number(input).unwrap_or(fallback)
}
