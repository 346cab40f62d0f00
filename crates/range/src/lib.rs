//! This crate provides [`Range`], a lazily evaluated arithmetic progression of integers meant to be
//! driven by loops. It can be used either through the explicit cursor protocol ([`Range::begin`],
//! [`Range::end`], [`RangeCursor::is_before`]) or as a plain [`Iterator`].

mod cursor;
mod error;
mod integer;
mod range;

pub use cursor::*;
pub use error::*;
pub use integer::*;
pub use range::*;
