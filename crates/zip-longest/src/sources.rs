use crate::{Cons, Lane, Lanes};

/// A tuple of sequences that can be zipped together.
///
/// This is implemented for tuples of one to eight elements where every element is a [`Copy`]
/// value that can be iterated over, which is the case for shared references to collections. Every
/// call to [`Sources::into_lanes`] starts a fresh pass over the sequences.
pub trait Sources: Copy {
    /// The chain of lanes that walks the sequences.
    type Lanes: Lanes;

    /// The flat tuple of optional elements produced for every step.
    type Item;

    fn into_lanes(self) -> Self::Lanes;

    /// Turns the nested slots produced by the chain into a flat tuple.
    fn flatten(slots: <Self::Lanes as Lanes>::Slots) -> Self::Item;
}

macro_rules! lanes_type {
    ($last: ident) => {
        Lane< <$last as IntoIterator>::IntoIter >
    };
    ($head: ident, $($tail: ident),+) => {
        Cons< <$head as IntoIterator>::IntoIter, lanes_type!($($tail),+) >
    };
}

macro_rules! lanes_value {
    ($last: expr) => {
        Lane::new($last.into_iter())
    };
    ($head: expr, $($tail: expr),+) => {
        Cons::new(Lane::new($head.into_iter()), lanes_value!($($tail),+))
    };
}

macro_rules! slots_pattern {
    ($last: ident) => {
        $last
    };
    ($head: ident, $($tail: ident),+) => {
        ($head, slots_pattern!($($tail),+))
    };
}

macro_rules! impl_sources {
    ($($source: ident $slot: ident $index: tt),+) => {
        impl<$($source),+> Sources for ($($source,)+)
        where
            $($source: IntoIterator + Copy),+
        {
            type Lanes = lanes_type!($($source),+);
            type Item = ($(Option<$source::Item>,)+);

            fn into_lanes(self) -> Self::Lanes {
                lanes_value!($(self.$index),+)
            }

            fn flatten(slots: <Self::Lanes as Lanes>::Slots) -> Self::Item {
                let slots_pattern!($($slot),+) = slots;
                ($($slot,)+)
            }
        }
    };
}

impl_sources!(A a 0);
impl_sources!(A a 0, B b 1);
impl_sources!(A a 0, B b 1, C c 2);
impl_sources!(A a 0, B b 1, C c 2, D d 3);
impl_sources!(A a 0, B b 1, C c 2, D d 3, E e 4);
impl_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
impl_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
impl_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);
