use std::fmt::Debug;

/// The cursor over a single sequence inside of a zip-longest cursor.
///
/// The lane holds the element that the sequence is currently at along with an explicit flag that
/// records whether the sequence has reached its end. Once a lane is exhausted its iterator is
/// never polled again and the lane reports [`None`] for every subsequent step.
#[derive(Clone)]
pub struct Lane<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    exhausted: bool,
    /// The number of times that the lane was advanced while it still had elements.
    position: usize,
}

impl<I> Debug for Lane<I>
where
    I: Iterator + Debug,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lane")
            .field("iter", &self.iter)
            .field("current", &self.current)
            .field("exhausted", &self.exhausted)
            .field("position", &self.position)
            .finish()
    }
}

impl<I: Iterator> Lane<I> {
    /// Creates a lane positioned at the first element of the sequence.
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        let mut lane = Self {
            iter,
            current,
            exhausted: false,
            position: 0,
        };
        lane.check_exhausted();
        lane
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The element that the lane is currently at or [`None`] if the sequence has ended.
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves to the next element of the sequence. This does nothing once the lane is exhausted.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        self.current = self.iter.next();
        self.position += 1;
        self.check_exhausted();
    }

    /// Takes the current element out of the lane and advances it.
    pub fn take(&mut self) -> Option<I::Item> {
        let current = self.current.take();
        self.advance();
        current
    }

    /// The number of elements left in the lane, including the current one.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|upper| upper.checked_add(1)),
        )
    }

    fn check_exhausted(&mut self) {
        if self.current.is_none() {
            self.exhausted = true;
            tracing::trace!(length = self.position, "Lane exhausted");
        }
    }
}
