//! Recursive structural merging of JSON-shaped mappings.
//!
//! The engine combines two mappings key by key, walking nested structure as
//! it goes. For every key in the union of both inputs:
//!
//! - two sequences concatenate, existing elements first;
//! - two mappings merge recursively;
//! - otherwise the incoming value wins unless it is nullish, in which case
//!   the existing value is kept.
//!
//! An absent side contributes an implicit null, so no key is ever dropped
//! and none is invented. Mismatched shapes (say, a sequence meeting a
//! mapping) are not an error; they fall through to the scalar rule and the
//! incoming value wins. Callers who need stricter semantics should validate
//! shapes before merging.
//!
//! [`patch`] is the same operation under a different intent: the second
//! argument conventionally carries only the fields it means to override.
//! The typed helpers ([`patch_typed`], [`to_mapping`], [`from_mapping`])
//! round-trip serde values through the engine so struct-level callers never
//! touch `serde_json::Value` directly.

mod engine;
mod typed;

pub use engine::{merge, merge_into, patch};
pub use typed::{from_mapping, patch_typed, to_mapping};
