//! This crate provides [`ZipLongest`], a combinator that walks several independent sequences in
//! lockstep and produces a tuple of optional elements for every step until the longest of the
//! sequences is exhausted. A sequence that runs out early reports [`None`] in its slot for the
//! remaining steps.
//!
//! ```rust
//! use iterkit_zip_longest::zip_longest;
//!
//! let names = vec!["a", "b", "c"];
//! let scores = vec![1, 2, 3, 4, 5];
//! let unnamed = zip_longest!(names, scores)
//!     .into_iter()
//!     .filter(|(name, _)| name.is_none())
//!     .count();
//! assert_eq!(unnamed, 2);
//! ```
//!
//! [`DynZipLongest`] offers the same semantics when the number of sequences is only known at
//! runtime and all of them produce the same element type.

mod dyn_zip_longest;
mod lane;
mod lanes;
mod sources;
mod zip_longest;

pub use dyn_zip_longest::*;
pub use lane::*;
pub use lanes::*;
pub use sources::*;
pub use zip_longest::*;
