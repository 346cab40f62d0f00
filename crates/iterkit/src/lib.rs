//! Lazy iteration primitives for loops.
//!
//! - [`Range`] produces an arithmetic progression of integers from a start towards a stop by a
//!   fixed step, stopping at the first value that reaches or passes the stop.
//! - [`ZipLongest`] walks several sequences in lockstep and produces a tuple of optional elements
//!   for every step until the longest of them is exhausted.
//!
//! Both are pull-based and single-pass per cursor, and both can be used as plain iterators.

pub use iterkit_range::{Integer, InvalidStepError, Range, RangeCursor, RangeIter, range};
pub use iterkit_zip_longest::{
    Cons, DynZipLongest, Lane, Lanes, PeekLanes, Sources, ZipLongest, ZipLongestCursor, zip_longest,
};
