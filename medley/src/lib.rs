//! Structural merge and function-pipeline utilities.
//!
//! `medley` bundles two small, independent tools behind one crate root:
//!
//! - [`mod@merge`]: recursive deep-combination of JSON-shaped mappings under an
//!   order-sensitive precedence policy, the [`patch`] convenience built on
//!   it, and a typed layer that round-trips `serde` values through the
//!   engine.
//! - [`pipe`]: an immutable, branch-safe builder that composes single-input,
//!   single-output steps into one callable.
//!
//! Supporting modules supply the vocabulary both lean on: [`guard`] for
//! shape predicates, [`pattern`] for shared regular expressions, and
//! [`transform`] for single-call string and number transforms.
//!
//! # Examples
//!
//! Merge an overlay into a base mapping. Sequences concatenate, nested
//! mappings combine recursively, and a nullish incoming value defers to the
//! existing one:
//!
//! ```rust
//! use serde_json::json;
//!
//! let existing = json!({"name": "Alice", "tags": ["a", "b"]});
//! let incoming = json!({"name": null, "tags": ["c"]});
//!
//! let merged = medley::merge(
//!     existing.as_object().expect("existing is an object"),
//!     incoming.as_object().expect("incoming is an object"),
//! );
//!
//! assert_eq!(merged.get("name"), Some(&json!("Alice")));
//! assert_eq!(merged.get("tags"), Some(&json!(["a", "b", "c"])));
//! ```
//!
//! Compose a pipeline and run it:
//!
//! ```rust
//! let pipeline = medley::start(|n: i32| n + 1).then(|n| n * 2).build();
//! assert_eq!(pipeline(3), 8);
//! ```

pub mod guard;
pub mod merge;
pub mod pattern;
pub mod pipe;
pub mod transform;

mod error;

pub use error::{MedleyError, MedleyResult};
pub use merge::{merge, merge_into, patch, patch_typed};
pub use pipe::{Chain, start};
