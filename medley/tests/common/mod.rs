//! Shared helpers for integration tests.

use serde_json::{Map, Value};

/// Unwrap a JSON fixture known to be an object.
///
/// # Panics
///
/// Panics when the fixture is not a JSON object; fixtures are inline
/// literals, so a panic here is a broken test, not a runtime condition.
pub fn mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}
