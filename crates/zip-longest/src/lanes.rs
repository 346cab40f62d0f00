use std::fmt::Debug;

use crate::Lane;

/// A chain of lanes that are advanced in lockstep.
///
/// The chain is built recursively: a single [`Lane`] is the chain over one sequence and a
/// [`Cons`] pairs the lane of one sequence with the chain over the remaining sequences. The slots
/// produced by a chain are nested the same way, `(Option<A>, (Option<B>, Option<C>))` for three
/// sequences, and are flattened into a tuple by [`Sources::flatten`](crate::Sources::flatten).
pub trait Lanes {
    /// The optional elements of every lane for a single step.
    type Slots;

    /// The number of sequences in the chain.
    const ARITY: usize;

    /// True once every lane in the chain is exhausted.
    fn is_exhausted(&self) -> bool;

    /// Takes the current element out of every lane and advances the lanes that still have
    /// elements.
    fn take(&mut self) -> Self::Slots;

    /// Advances every lane that still has elements. Exhausted lanes are left untouched.
    fn advance(&mut self);

    /// The number of steps left in the chain which is the maximum over all of its lanes.
    fn size_hint(&self) -> (usize, Option<usize>);
}

/// A chain of lanes whose current elements can be read without advancing.
pub trait PeekLanes: Lanes {
    fn current(&self) -> Self::Slots;
}

/// A lane followed by the chain over the remaining sequences.
pub struct Cons<I: Iterator, R> {
    head: Lane<I>,
    tail: R,
}

impl<I, R> Clone for Cons<I, R>
where
    I: Iterator + Clone,
    I::Item: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<I, R> Debug for Cons<I, R>
where
    I: Iterator + Debug,
    I::Item: Debug,
    R: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cons")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<I: Iterator, R: Lanes> Cons<I, R> {
    pub fn new(head: Lane<I>, tail: R) -> Self {
        Self { head, tail }
    }

    pub fn head(&self) -> &Lane<I> {
        &self.head
    }

    pub fn tail(&self) -> &R {
        &self.tail
    }
}

impl<I: Iterator> Lanes for Lane<I> {
    type Slots = Option<I::Item>;

    const ARITY: usize = 1;

    fn is_exhausted(&self) -> bool {
        Lane::is_exhausted(self)
    }

    fn take(&mut self) -> Self::Slots {
        Lane::take(self)
    }

    fn advance(&mut self) {
        Lane::advance(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Lane::size_hint(self)
    }
}

impl<I> PeekLanes for Lane<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn current(&self) -> Self::Slots {
        Lane::current(self).cloned()
    }
}

impl<I: Iterator, R: Lanes> Lanes for Cons<I, R> {
    type Slots = (Option<I::Item>, R::Slots);

    const ARITY: usize = 1 + R::ARITY;

    fn is_exhausted(&self) -> bool {
        self.head.is_exhausted() && self.tail.is_exhausted()
    }

    fn take(&mut self) -> Self::Slots {
        (self.head.take(), self.tail.take())
    }

    fn advance(&mut self) {
        self.head.advance();
        self.tail.advance();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (head_lower, head_upper) = self.head.size_hint();
        let (tail_lower, tail_upper) = self.tail.size_hint();

        let lower = head_lower.max(tail_lower);
        let upper = match (head_upper, tail_upper) {
            (Some(head), Some(tail)) => Some(head.max(tail)),
            _ => None,
        };
        (lower, upper)
    }
}

impl<I, R> PeekLanes for Cons<I, R>
where
    I: Iterator,
    I::Item: Clone,
    R: PeekLanes,
{
    fn current(&self) -> Self::Slots {
        (self.head.current().cloned(), self.tail.current())
    }
}
