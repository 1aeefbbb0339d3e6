//! Shared regular expressions.
//!
//! Each pattern is compiled once, on first use, behind a
//! [`std::sync::LazyLock`]. The [`crate::transform`] module drives its case
//! conversions and character-class stripping off these constants; they are
//! public so callers can reuse the same vocabulary.

use std::sync::LazyLock;

use regex::Regex;

/// One or more whitespace characters.
pub static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// One or more decimal digit characters.
pub static DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"[0-9]+"));

/// One or more ASCII letter characters.
pub static LETTERS: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Za-z]+"));

/// One or more characters outside `[A-Za-z0-9]`.
pub static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"[^A-Za-z0-9]+"));

/// A lowercase letter immediately followed by an uppercase letter, both
/// captured. Used to split word boundaries in `camelCase` and `PascalCase`
/// input.
pub static LOWER_UPPER_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| compile(r"([a-z])([A-Z])"));

/// A run of dash, underscore, or space separators plus the character that
/// follows it.
pub static SEPARATOR_AND_CHAR: LazyLock<Regex> = LazyLock::new(|| compile(r"[-_ ]+."));

/// An uppercase letter at the start of the input.
pub static FIRST_UPPER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]"));

/// A lowercase letter at the start of the input.
pub static FIRST_LOWER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-z]"));

/// A line break, with or without a carriage return.
pub static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| compile(r"\r?\n"));

/// An optionally signed run of digits at the start of the input.
pub static INTEGER_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"^[+-]?[0-9]+"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern compiles")
}
