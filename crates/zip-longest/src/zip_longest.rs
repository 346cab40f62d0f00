use std::{fmt::Debug, iter::FusedIterator};

use crate::{Lanes, PeekLanes, Sources};

/// Zips together borrowed sequences, producing a tuple of optional elements for every step until
/// all of the sequences are exhausted.
///
/// The combinator only holds on to the references of the sequences, so the sequences must outlive
/// it. Every call to [`ZipLongest::iter`] starts a new pass over all of the sequences, which means
/// that the same combinator can be iterated over more than once.
///
/// ```rust
/// use iterkit_zip_longest::ZipLongest;
///
/// let zipped = ZipLongest::new((&[1, 2, 3], &["a"]));
/// let steps = zipped.iter().collect::<Vec<_>>();
/// assert_eq!(
///     steps,
///     vec![(Some(&1), Some(&"a")), (Some(&2), None), (Some(&3), None)]
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ZipLongest<S> {
    sources: S,
}

impl<S: Sources> ZipLongest<S> {
    pub fn new(sources: S) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> S {
        self.sources
    }

    /// The number of sequences being zipped.
    pub fn arity(&self) -> usize {
        <S::Lanes as Lanes>::ARITY
    }

    /// Starts a new pass over all of the sequences.
    pub fn iter(&self) -> ZipLongestCursor<S> {
        tracing::trace!(arity = self.arity(), "Starting a zip-longest pass");
        ZipLongestCursor::new(self.sources.into_lanes())
    }
}

impl<S: Sources> IntoIterator for ZipLongest<S> {
    type Item = S::Item;
    type IntoIter = ZipLongestCursor<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Sources> IntoIterator for &ZipLongest<S> {
    type Item = S::Item;
    type IntoIter = ZipLongestCursor<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single pass over the sequences of a [`ZipLongest`].
///
/// The cursor can either be driven through [`ZipLongestCursor::is_done`],
/// [`ZipLongestCursor::current`] and [`ZipLongestCursor::advance`], or used as an [`Iterator`].
/// It's done once every one of its lanes is exhausted.
pub struct ZipLongestCursor<S: Sources> {
    lanes: S::Lanes,
}

impl<S: Sources> ZipLongestCursor<S> {
    pub fn new(lanes: S::Lanes) -> Self {
        Self { lanes }
    }

    pub fn lanes(&self) -> &S::Lanes {
        &self.lanes
    }

    /// True once all of the sequences are exhausted.
    pub fn is_done(&self) -> bool {
        self.lanes.is_exhausted()
    }

    /// Advances every sequence that still has elements by one position.
    pub fn advance(&mut self) {
        self.lanes.advance()
    }

    /// The optional elements that the sequences are currently at.
    pub fn current(&self) -> S::Item
    where
        S::Lanes: PeekLanes,
    {
        S::flatten(self.lanes.current())
    }
}

impl<S: Sources> Clone for ZipLongestCursor<S>
where
    S::Lanes: Clone,
{
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes.clone(),
        }
    }
}

impl<S: Sources> Debug for ZipLongestCursor<S>
where
    S::Lanes: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipLongestCursor")
            .field("lanes", &self.lanes)
            .finish()
    }
}

impl<S: Sources> Iterator for ZipLongestCursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        Some(S::flatten(self.lanes.take()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lanes.size_hint()
    }
}

impl<S: Sources> FusedIterator for ZipLongestCursor<S> {}

/// Zips together the given sequences by reference.
///
/// ```rust
/// use iterkit_zip_longest::zip_longest;
///
/// let a = vec![1, 2, 3];
/// let b = vec!['x', 'y', 'z', 'w', 'v'];
/// let mut missing_numbers = 0;
/// for (number, letter) in zip_longest!(a, b) {
///     assert!(letter.is_some());
///     if number.is_none() {
///         missing_numbers += 1;
///     }
/// }
/// assert_eq!(missing_numbers, 2);
/// ```
#[macro_export]
macro_rules! zip_longest {
    ($($sequence: expr),+ $(,)?) => {
        $crate::ZipLongest::new(($(&$sequence,)+))
    };
}
