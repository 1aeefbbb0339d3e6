//! Error and result types for the typed merge layer.
//!
//! The untyped engine is total and never fails; errors arise only when
//! values cross the serde boundary in [`crate::merge::to_mapping`],
//! [`crate::merge::from_mapping`], and [`crate::patch_typed`].

use thiserror::Error;

/// Convenience alias for fallible operations in this crate.
pub type MedleyResult<T> = Result<T, MedleyError>;

/// Errors surfaced by the typed merge layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MedleyError {
    /// A value could not be serialised into a JSON document.
    #[error("failed to serialise value: {source}")]
    Serialize {
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// A merged document could not be deserialised into the target type.
    #[error("failed to deserialise merged value: {source}")]
    Deserialize {
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value serialised to something other than a JSON object.
    #[error("expected a mapping, found JSON {kind}")]
    NotAMapping {
        /// JSON type name of the offending value.
        kind: &'static str,
    },
}
