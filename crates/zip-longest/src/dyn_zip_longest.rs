use std::{fmt::Debug, iter::FusedIterator};

use crate::Lane;

type BoxedLane<'a, T> = Lane<Box<dyn Iterator<Item = T> + 'a>>;

/// A zip-longest pass over a number of sequences that's only known at runtime.
///
/// All of the sequences must produce the same element type and every step produces a [`Vec`] with
/// one slot per sequence, in the order in which the sequences were given. Zipping no sequences at
/// all produces no steps.
pub struct DynZipLongest<'a, T> {
    lanes: Vec<BoxedLane<'a, T>>,
}

impl<'a, T> DynZipLongest<'a, T> {
    pub fn new<I>(sequences: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
        <I::Item as IntoIterator>::IntoIter: 'a,
    {
        let lanes = sequences
            .into_iter()
            .map(|sequence| {
                Lane::new(Box::new(sequence.into_iter()) as Box<dyn Iterator<Item = T> + 'a>)
            })
            .collect::<Vec<_>>();
        tracing::trace!(arity = lanes.len(), "Starting a dynamic zip-longest pass");
        Self { lanes }
    }

    /// The number of sequences being zipped.
    pub fn arity(&self) -> usize {
        self.lanes.len()
    }

    /// True once all of the sequences are exhausted.
    pub fn is_done(&self) -> bool {
        self.lanes.iter().all(Lane::is_exhausted)
    }

    /// Advances every sequence that still has elements by one position.
    pub fn advance(&mut self) {
        self.lanes.iter_mut().for_each(Lane::advance)
    }

    /// The optional elements that the sequences are currently at.
    pub fn current(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.lanes
            .iter()
            .map(|lane| lane.current().cloned())
            .collect()
    }
}

/// The boxed iterators can't be formatted so only the state of every lane is shown.
impl<T> Debug for DynZipLongest<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let positions = self.lanes.iter().map(Lane::position).collect::<Vec<_>>();
        let exhausted = self.lanes.iter().map(Lane::is_exhausted).collect::<Vec<_>>();
        f.debug_struct("DynZipLongest")
            .field("arity", &self.arity())
            .field("positions", &positions)
            .field("exhausted", &exhausted)
            .finish_non_exhaustive()
    }
}

impl<T> Iterator for DynZipLongest<'_, T> {
    type Item = Vec<Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        Some(self.lanes.iter_mut().map(Lane::take).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lanes
            .iter()
            .map(Lane::size_hint)
            .fold((0, Some(0)), |(lower, upper), (lane_lower, lane_upper)| {
                let upper = match (upper, lane_upper) {
                    (Some(upper), Some(lane_upper)) => Some(upper.max(lane_upper)),
                    _ => None,
                };
                (lower.max(lane_lower), upper)
            })
    }
}

impl<T> FusedIterator for DynZipLongest<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_the_order_of_the_sequences() {
        // Arrange
        let sequences = vec![vec![1, 2], vec![], vec![3, 4, 5]];

        // Act
        let steps = DynZipLongest::new(&sequences).collect::<Vec<_>>();

        // Assert
        assert_eq!(
            steps,
            vec![
                vec![Some(&1), None, Some(&3)],
                vec![Some(&2), None, Some(&4)],
                vec![None, None, Some(&5)],
            ]
        );
    }

    #[test]
    fn no_sequences_produce_no_steps() {
        let mut zipped = DynZipLongest::new(Vec::<Vec<u8>>::new());

        assert_eq!(zipped.arity(), 0);
        assert!(zipped.is_done());
        assert_eq!(zipped.next(), None);
    }

    #[test]
    fn debug_shows_the_state_of_every_lane() {
        let mut zipped = DynZipLongest::new([0..1, 0..3]);
        zipped.next();

        assert_eq!(
            format!("{zipped:?}"),
            "DynZipLongest { arity: 2, positions: [1, 1], exhausted: [true, false], .. }"
        );
    }

    #[test]
    fn cursor_protocol_reads_without_advancing() {
        let mut zipped = DynZipLongest::new([0..2, 0..1]);

        assert_eq!(zipped.current(), vec![Some(0), Some(0)]);
        assert_eq!(zipped.current(), vec![Some(0), Some(0)]);
        zipped.advance();
        assert_eq!(zipped.current(), vec![Some(1), None]);
        assert_eq!(zipped.size_hint(), (1, Some(1)));
        zipped.advance();
        assert!(zipped.is_done());
        assert_eq!(zipped.current(), vec![None, None]);
    }
}
