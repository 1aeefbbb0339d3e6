//! Shape predicates over JSON-shaped values.
//!
//! The merge engine sorts every value it visits into one of three shapes:
//! mapping, sequence, or scalar. These predicates give that classification
//! a name so call sites read like the precedence rules they implement. All
//! of them are pure, total, and panic-free.

use serde_json::Value;

/// Returns `true` when `value` is a key-value mapping.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
///
/// assert!(medley::guard::is_mapping(&json!({"a": 1})));
/// assert!(!medley::guard::is_mapping(&json!([1, 2])));
/// ```
#[must_use]
pub fn is_mapping(value: &Value) -> bool {
    value.is_object()
}

/// Returns `true` when `value` is an ordered sequence.
#[must_use]
pub fn is_sequence(value: &Value) -> bool {
    value.is_array()
}

/// Returns `true` when `value` represents absence.
#[must_use]
pub fn is_nullish(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` when `value` is neither a mapping nor a sequence.
///
/// Nullish values count as scalars; the merge precedence rules treat them
/// separately via [`is_nullish`].
#[must_use]
pub fn is_scalar(value: &Value) -> bool {
    !is_mapping(value) && !is_sequence(value)
}

/// Returns `true` when `value` is a mapping that contains `key`.
///
/// Non-mapping values never contain entries, so the predicate is total.
#[must_use]
pub fn has_entry(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{has_entry, is_mapping, is_nullish, is_scalar, is_sequence};

    #[test]
    fn classification_is_exhaustive_and_disjoint() {
        let values = [
            json!(null),
            json!(true),
            json!(42),
            json!("text"),
            json!([1, 2]),
            json!({"a": 1}),
        ];
        for value in &values {
            let shapes = [is_mapping(value), is_sequence(value), is_scalar(value)];
            assert_eq!(
                shapes.iter().filter(|hit| **hit).count(),
                1,
                "exactly one shape must match {value}"
            );
        }
    }

    #[test]
    fn nullish_is_only_null() {
        assert!(is_nullish(&json!(null)));
        assert!(!is_nullish(&json!(0)));
        assert!(!is_nullish(&json!("")));
        assert!(!is_nullish(&json!(false)));
    }

    #[test]
    fn has_entry_requires_a_mapping() {
        assert!(has_entry(&json!({"key": null}), "key"));
        assert!(!has_entry(&json!({"key": null}), "other"));
        assert!(!has_entry(&json!([1, 2]), "0"));
        assert!(!has_entry(&json!("key"), "key"));
    }
}
