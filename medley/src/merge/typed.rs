//! Typed merging via serde round-trips.
//!
//! These helpers let struct-level callers use the untyped engine without
//! handling `serde_json::Value` themselves: serialise both sides into
//! mappings, merge, and deserialise the combined document back into the
//! target type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{MedleyError, MedleyResult};

use super::engine::merge;

/// Serialise `value` into a JSON mapping.
///
/// # Errors
///
/// Returns [`MedleyError::Serialize`] when serialisation fails and
/// [`MedleyError::NotAMapping`] when the serialised form is not a JSON
/// object.
///
/// # Examples
///
/// ```rust
/// use medley::MedleyError;
///
/// let err = medley::merge::to_mapping(&42).unwrap_err();
/// assert!(matches!(err, MedleyError::NotAMapping { kind: "number" }));
/// ```
pub fn to_mapping<T: Serialize>(value: &T) -> MedleyResult<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(MedleyError::NotAMapping {
            kind: json_kind(&other),
        }),
        Err(source) => Err(MedleyError::Serialize { source }),
    }
}

/// Deserialise a JSON mapping into `T`.
///
/// # Errors
///
/// Returns [`MedleyError::Deserialize`] when the document does not fit the
/// target type.
pub fn from_mapping<T: DeserializeOwned>(mapping: Map<String, Value>) -> MedleyResult<T> {
    serde_json::from_value(Value::Object(mapping)).map_err(|source| {
        tracing::debug!(%source, "merged document does not fit the target type");
        MedleyError::Deserialize { source }
    })
}

/// Merge a partial overlay over a typed value, returning a new value.
///
/// Both sides are serialised, merged under the engine's precedence rules,
/// and deserialised back into `T`. Fields the overlay serialises as null
/// (an unset `Option`, say) defer to the existing value, so a partial type
/// needs no serde attributes to leave fields alone.
///
/// # Errors
///
/// Returns [`MedleyError::Serialize`] or [`MedleyError::NotAMapping`] when
/// either side fails to serialise into a mapping, and
/// [`MedleyError::Deserialize`] when the merged document no longer fits
/// `T`.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Deserialize, Serialize)]
/// struct Profile {
///     name: String,
///     volume: u32,
/// }
///
/// #[derive(Serialize)]
/// struct ProfilePatch {
///     volume: Option<u32>,
/// }
///
/// let profile = Profile { name: String::from("Alice"), volume: 50 };
///
/// let louder = medley::patch_typed(&profile, &ProfilePatch { volume: Some(100) })?;
/// assert_eq!(louder.volume, 100);
/// assert_eq!(louder.name, "Alice");
///
/// let unchanged = medley::patch_typed(&profile, &ProfilePatch { volume: None })?;
/// assert_eq!(unchanged.volume, 50);
/// # Ok::<_, medley::MedleyError>(())
/// ```
pub fn patch_typed<T, P>(existing: &T, partial: &P) -> MedleyResult<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize,
{
    let base = to_mapping(existing)?;
    let overlay = to_mapping(partial)?;
    from_mapping(merge(&base, &overlay))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
