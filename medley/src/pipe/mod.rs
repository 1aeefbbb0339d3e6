//! Function-pipeline composition.
//!
//! A [`Chain`] is an immutable, ordered sequence of single-input,
//! single-output steps. [`start`] opens a chain with its first step,
//! [`Chain::then`] appends further steps, and [`Chain::build`] finalises
//! the sequence into one callable that applies every step left to right.
//!
//! Chains are values, not accumulators: `then` never mutates its receiver,
//! it returns a new chain sharing the receiver's composed prefix. Several
//! independent continuations can therefore branch from the same point:
//!
//! ```rust
//! let base = medley::start(|n: i32| n + 1);
//!
//! let double = base.then(|n| n * 2).build();
//! let triple = base.then(|n| n * 3).build();
//!
//! assert_eq!(double(4), 10);
//! assert_eq!(triple(4), 15);
//! ```
//!
//! Steps are opaque to the chain. It performs no validation, retry, or
//! containment around them; a panicking step unwinds straight out of the
//! composed callable and later steps do not run.

mod chain;

pub use chain::{Chain, start};
