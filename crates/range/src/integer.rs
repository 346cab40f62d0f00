use std::{
    fmt::{Debug, Display},
    hash::Hash,
    num::ParseIntError,
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
}

/// The signed integer types that a [`Range`](crate::Range) can be made of.
///
/// Unsigned types are not supported since a range must be able to walk downwards with a negative
/// step. All of the supported types are at most 64 bits wide which allows any distance between two
/// values to be computed in an `i128` and any element count to fit in a `u64`.
pub trait Integer:
    sealed::Sealed
    + Copy
    + Default
    + Ord
    + Hash
    + Debug
    + Display
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Adds `rhs` to `self`, returning [`None`] if the result can't be represented.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Widens the value into an `i128` which can hold any supported integer losslessly.
    fn to_i128(self) -> i128;
}

macro_rules! impl_integer {
    ($($ty: ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize);

/// The number of elements produced when walking from `start` towards `stop` by `step`.
///
/// This is zero when the sign of `step` doesn't agree with the direction from `start` to `stop`
/// and otherwise the distance divided by the step, rounded up since the last element may fall
/// short of `stop`.
pub(crate) fn element_count<T: Integer>(start: T, stop: T, step: T) -> u64 {
    let (start, stop, step) = (start.to_i128(), stop.to_i128(), step.to_i128());
    let distance = match step.signum() {
        1 if start < stop => stop - start,
        -1 if start > stop => start - stop,
        _ => return 0,
    };
    // The distance between two 64-bit values always fits in a u64 and so does the count.
    distance.unsigned_abs().div_ceil(step.unsigned_abs()) as u64
}
