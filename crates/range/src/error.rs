/// Returned when a range is constructed with an explicit step of zero. This is the only way that
/// the construction of a [`Range`](crate::Range) can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("range step argument must not be zero")]
pub struct InvalidStepError;
