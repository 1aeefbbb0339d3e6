//! Untyped merge engine over `serde_json` values.

use serde_json::{Map, Value};

use crate::guard;

/// Recursively merge `incoming` over `existing`, returning a new mapping.
///
/// The result's key set is exactly the union of both inputs' key sets.
/// Neither input is mutated; values carried over from either side are
/// cloned into the result. Use [`merge_into`] when the overlay is owned
/// and its values should be moved instead.
///
/// Recursion depth is bounded only by the input. Extremely deep documents
/// will exhaust the stack; there is no cycle detection because
/// [`serde_json::Value`] cannot represent cycles.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
///
/// let existing = json!({"settings": {"theme": "light", "volume": 50}});
/// let incoming = json!({"settings": {"volume": 100}});
///
/// let merged = medley::merge(
///     existing.as_object().expect("object"),
///     incoming.as_object().expect("object"),
/// );
///
/// assert_eq!(
///     Value::Object(merged),
///     json!({"settings": {"theme": "light", "volume": 100}}),
/// );
/// ```
#[must_use]
pub fn merge(existing: &Map<String, Value>, incoming: &Map<String, Value>) -> Map<String, Value> {
    let mut result = existing.clone();
    merge_into(&mut result, incoming.clone());
    result
}

/// Apply a partial overlay to `existing`, returning a new mapping.
///
/// Mechanically identical to [`merge`]; the name records intent. A patch
/// expresses only the fields it means to override, and fields it sets to
/// null defer to the existing value.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
///
/// let original = json!({"name": "Alice", "preferences": {"theme": "light", "language": "en"}});
/// let overlay = json!({"preferences": {"theme": "dark"}});
///
/// let patched = medley::patch(
///     original.as_object().expect("object"),
///     overlay.as_object().expect("object"),
/// );
///
/// assert_eq!(
///     Value::Object(patched),
///     json!({"name": "Alice", "preferences": {"theme": "dark", "language": "en"}}),
/// );
/// ```
#[must_use]
pub fn patch(existing: &Map<String, Value>, partial: &Map<String, Value>) -> Map<String, Value> {
    merge(existing, partial)
}

/// Merge `incoming` over `target` in place, consuming the overlay.
///
/// Precedence rules are identical to [`merge`]; the difference is
/// ownership. Values contributed by `incoming` are moved into `target`
/// rather than cloned, so overlaying an owned document allocates nothing
/// beyond the mappings that actually combine.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
///
/// let mut target = json!({"tags": ["a"], "volume": 50})
///     .as_object()
///     .cloned()
///     .expect("object");
/// let overlay = json!({"tags": ["b"], "volume": null})
///     .as_object()
///     .cloned()
///     .expect("object");
///
/// medley::merge_into(&mut target, overlay);
///
/// assert_eq!(Value::Object(target), json!({"tags": ["a", "b"], "volume": 50}));
/// ```
pub fn merge_into(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        let merged = merge_entry(target.remove(&key), value);
        target.insert(key, merged);
    }
}

/// Resolve one key's value from the pair of contributions.
///
/// `existing` is `None` when only the overlay carries the key. The overlay
/// side is never absent here because [`merge_into`] iterates overlay
/// entries; existing-only keys stay in `target` untouched, which is the
/// same outcome the precedence table assigns them (implicit null incoming
/// defers to existing).
fn merge_entry(existing: Option<Value>, incoming: Value) -> Value {
    match (existing, incoming) {
        (Some(Value::Array(mut seq)), Value::Array(tail)) => {
            seq.extend(tail);
            Value::Array(seq)
        }
        (Some(Value::Object(mut base)), Value::Object(overlay)) => {
            merge_into(&mut base, overlay);
            Value::Object(base)
        }
        (kept, candidate) => {
            if guard::is_nullish(&candidate) {
                kept.unwrap_or(Value::Null)
            } else {
                candidate
            }
        }
    }
}
