use std::iter::FusedIterator;

use crate::{Integer, integer::element_count};

/// A position within a [`Range`](crate::Range).
///
/// A cursor is a `(value, step)` pair: dereferencing it with [`RangeCursor::value`] gives the
/// current value and [`RangeCursor::advance`] moves it by the step. Cursors aren't compared for
/// equality to decide when to stop. Instead, [`RangeCursor::is_before`] checks whether the cursor
/// is still on the near side of a boundary in the direction of the step, which means that a range
/// whose length isn't a multiple of its step still terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeCursor<T = i64> {
    value: T,
    step: T,
    /// Set once advancing would have left the domain of `T`. Such a cursor is past every boundary.
    overflowed: bool,
}

impl<T: Integer> RangeCursor<T> {
    pub fn new(value: T, step: T) -> Self {
        Self {
            value,
            step,
            overflowed: false,
        }
    }

    /// The value that the cursor currently points at.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Moves the cursor forward by its step.
    ///
    /// If the next value can't be represented by `T` the cursor keeps its last value and is marked
    /// as out of bounds instead, which is where the unbounded value would have landed anyway.
    pub fn advance(&mut self) -> &mut Self {
        match self.value.checked_add(self.step) {
            Some(value) => self.value = value,
            None => self.overflowed = true,
        }
        self
    }

    /// Checks whether the cursor is still in bounds with respect to `boundary`.
    ///
    /// With a positive step this is `value < boundary`, with a negative step it's
    /// `value > boundary`. A cursor with a zero step is never in bounds.
    pub fn is_before(&self, boundary: &Self) -> bool {
        if self.overflowed {
            return false;
        }
        (self.step > T::ZERO && self.value < boundary.value)
            || (self.step < T::ZERO && self.value > boundary.value)
    }

    /// The number of values left between this cursor and `boundary`, including the current one.
    pub fn remaining(&self, boundary: &Self) -> u64 {
        if self.overflowed {
            return 0;
        }
        element_count(self.value, boundary.value, self.step)
    }
}

/// An iterator over the values of a [`Range`](crate::Range).
///
/// This drives a begin cursor against the end cursor of the range using the cursor protocol.
#[derive(Clone, Debug)]
pub struct RangeIter<T = i64> {
    cursor: RangeCursor<T>,
    end: RangeCursor<T>,
}

impl<T: Integer> RangeIter<T> {
    pub fn new(begin: RangeCursor<T>, end: RangeCursor<T>) -> Self {
        Self { cursor: begin, end }
    }

    /// The cursor pointing at the value that will be returned next, if it's in bounds.
    pub fn cursor(&self) -> &RangeCursor<T> {
        &self.cursor
    }
}

impl<T: Integer> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.is_before(&self.end) {
            return None;
        }
        let value = self.cursor.value();
        self.cursor.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.cursor.remaining(&self.end)) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Integer> FusedIterator for RangeIter<T> {}
