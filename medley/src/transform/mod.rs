//! Single-call string and number transforms.
//!
//! Each transform is a small free function with a one-shot contract: take
//! a value, return the transformed value, touch nothing else. They compose
//! naturally as pipeline steps:
//!
//! ```rust
//! use medley::transform::string;
//!
//! let slug = medley::start(|s: String| string::to_kebab_case(&s))
//!     .then(|s| string::truncate(&s, 16))
//!     .build();
//!
//! assert_eq!(slug(String::from("Launch Checklist Draft")), "launch-checklist");
//! ```
//!
//! Operations that are already a single `str` or `String` method in Rust
//! (trim, case folding, splitting, repetition) are deliberately absent;
//! call the std method instead.

pub mod number;
pub mod string;
