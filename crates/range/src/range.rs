use std::{fmt::Display, str::FromStr};

use anyhow::{Context as _, bail};
use serde::{Deserialize, Serialize};

use crate::{Integer, InvalidStepError, RangeCursor, RangeIter, integer::element_count};

/// A lazily evaluated arithmetic progression from `start` towards `stop` by `step`.
///
/// A range can be constructed in three ways:
///
/// ```rust
/// use iterkit_range::{InvalidStepError, Range};
///
/// // start = 0, step = 1
/// assert_eq!(Range::to(3).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// // step = 1
/// assert_eq!(Range::new(2, 5).iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// // fails if step == 0
/// assert_eq!(Range::with_step(5, 2, 0), Err(InvalidStepError));
/// ```
///
/// The `start` may be greater than the `stop` in which case a negative step walks downwards. The
/// range is empty if the step is positive and `start >= stop`, or if the step is negative and
/// `start <= stop`. The `stop` is never produced: iteration ends at the first value that reaches
/// or passes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RangeDefinition<T>",
    into = "RangeDefinition<T>",
    bound(
        serialize = "T: Integer + Serialize",
        deserialize = "T: Integer + Deserialize<'de>"
    )
)]
pub struct Range<T = i64> {
    start: T,
    stop: T,
    step: T,
}

impl<T: Integer> Range<T> {
    /// A range from zero up to (but excluding) `stop`.
    pub fn to(stop: T) -> Self {
        Self::new(T::ZERO, stop)
    }

    /// A range from `start` up to (but excluding) `stop` with a step of one.
    pub fn new(start: T, stop: T) -> Self {
        Self {
            start,
            stop,
            step: T::ONE,
        }
    }

    /// A range from `start` towards `stop` with an explicit step, which must not be zero.
    pub fn with_step(start: T, stop: T, step: T) -> Result<Self, InvalidStepError> {
        if step == T::ZERO {
            tracing::debug!(%start, %stop, "Rejecting a range with a zero step");
            return Err(InvalidStepError);
        }
        Ok(Self { start, stop, step })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// A cursor pointing at the first value of the range.
    pub fn begin(&self) -> RangeCursor<T> {
        RangeCursor::new(self.start, self.step)
    }

    /// A cursor at `stop`. This is only meaningful as the boundary passed to
    /// [`RangeCursor::is_before`] and is not necessarily reachable from [`Range::begin`].
    pub fn end(&self) -> RangeCursor<T> {
        RangeCursor::new(self.stop, self.step)
    }

    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self.begin(), self.end())
    }

    /// The number of values in the range, computed without iterating over it.
    pub fn len(&self) -> u64 {
        element_count(self.start, self.stop, self.step)
    }

    pub fn is_empty(&self) -> bool {
        !self.begin().is_before(&self.end())
    }

    /// Checks whether `value` is one of the values that the range produces.
    pub fn contains(&self, value: T) -> bool {
        // The value must lie between the start and the stop in the direction of the step.
        let cursor = RangeCursor::new(value, self.step);
        !cursor.is_before(&self.begin())
            && cursor.is_before(&self.end())
            && (value.to_i128() - self.start.to_i128()) % self.step.to_i128() == 0
    }
}

impl<T: Integer> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Integer> IntoIterator for &Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A range from zero up to (but excluding) `stop`.
pub fn range<T: Integer>(stop: T) -> Range<T> {
    Range::to(stop)
}

impl<T: Integer> Display for Range<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

/// Parses a range from one of `stop`, `start:stop` or `start:stop:step`.
impl<T: Integer> FromStr for Range<T> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let components = s
            .split(':')
            .map(|component| {
                component
                    .trim()
                    .parse::<T>()
                    .with_context(|| format!("Invalid range component '{component}' in '{s}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        match components.as_slice() {
            [stop] => Ok(Self::to(*stop)),
            [start, stop] => Ok(Self::new(*start, *stop)),
            [start, stop, step] => Self::with_step(*start, *stop, *step)
                .with_context(|| format!("Invalid range '{s}'")),
            _ => bail!("Invalid range '{s}': expected 'stop', 'start:stop' or 'start:stop:step'"),
        }
    }
}

/// The serialized form of a [`Range`]. The `start` defaults to zero and the `step` to one, so
/// `{ "stop": 5 }` is the same as `Range::to(5)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Integer + Deserialize<'de>"))]
struct RangeDefinition<T> {
    #[serde(default)]
    start: T,
    stop: T,
    #[serde(default = "default_step")]
    step: T,
}

fn default_step<T: Integer>() -> T {
    T::ONE
}

impl<T: Integer> TryFrom<RangeDefinition<T>> for Range<T> {
    type Error = InvalidStepError;

    fn try_from(value: RangeDefinition<T>) -> Result<Self, Self::Error> {
        Self::with_step(value.start, value.stop, value.step)
    }
}

impl<T: Integer> From<Range<T>> for RangeDefinition<T> {
    fn from(value: Range<T>) -> Self {
        Self {
            start: value.start,
            stop: value.stop,
            step: value.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Integer>(range: Range<T>) -> Vec<T> {
        range.into_iter().collect()
    }

    #[test]
    fn stop_only_counts_up_from_zero() {
        assert_eq!(collect(Range::to(5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(collect(range(5)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn start_and_stop_use_a_unit_step() {
        assert_eq!(collect(Range::new(2, 5)), vec![2, 3, 4]);
    }

    #[test]
    fn negative_step_counts_down() {
        assert_eq!(collect(Range::with_step(5, 2, -1).unwrap()), vec![5, 4, 3]);
    }

    #[test]
    fn uneven_step_stops_at_first_overshoot() {
        assert_eq!(
            collect(Range::with_step(1, 10, 2).unwrap()),
            vec![1, 3, 5, 7, 9]
        );
        assert_eq!(collect(Range::with_step(10, 1, -4).unwrap()), vec![10, 6, 2]);
    }

    #[test]
    fn inconsistent_direction_is_empty() {
        let cases = vec![
            Range::new(5, 2),
            Range::new(3, 3),
            Range::with_step(2, 5, -1).unwrap(),
            Range::with_step(-1, 0, -1).unwrap(),
        ];

        for range in cases {
            assert!(range.is_empty(), "{range} should be empty");
            assert_eq!(range.len(), 0);
            assert_eq!(range.iter().next(), None);
        }
    }

    #[test]
    fn zero_step_is_rejected() {
        for (start, stop) in [(0, 0), (0, 10), (10, 0), (-5, 5), (i64::MIN, i64::MAX)] {
            assert_eq!(Range::with_step(start, stop, 0), Err(InvalidStepError));
        }
    }

    #[test]
    fn cursor_protocol_matches_the_iterator() {
        // Arrange
        let range = Range::with_step(-3, 8, 3).unwrap();
        let end = range.end();
        let mut values = Vec::new();

        // Act
        let mut cursor = range.begin();
        while cursor.is_before(&end) {
            values.push(cursor.value());
            cursor.advance();
        }

        // Assert
        assert_eq!(values, vec![-3, 0, 3, 6]);
        assert_eq!(values, collect(range));
        assert_eq!(end.value(), 8);
    }

    #[test]
    fn len_matches_the_number_of_values() {
        let cases = vec![
            Range::to(5),
            Range::new(2, 5),
            Range::new(5, 2),
            Range::with_step(5, 2, -1).unwrap(),
            Range::with_step(1, 10, 2).unwrap(),
            Range::with_step(-20, 20, 7).unwrap(),
            Range::with_step(20, -20, -7).unwrap(),
        ];

        for range in cases {
            assert_eq!(range.len(), range.iter().count() as u64, "Mismatch for {range}");
        }
    }

    #[test]
    fn ranges_near_the_end_of_the_domain_terminate() {
        assert_eq!(
            collect(Range::with_step(120i8, i8::MAX, 5).unwrap()),
            vec![120, 125]
        );
        assert_eq!(
            collect(Range::with_step(-120i8, i8::MIN, -5).unwrap()),
            vec![-120, -125]
        );
        assert_eq!(Range::new(i8::MIN, i8::MAX).iter().count(), 255);
    }

    #[test]
    fn contains_only_produced_values() {
        let range = Range::with_step(1, 10, 2).unwrap();
        for value in -5..15 {
            assert_eq!(
                range.contains(value),
                range.iter().any(|produced| produced == value),
                "Mismatch for {value}"
            );
        }

        let range = Range::with_step(10, -10, -3).unwrap();
        for value in -15..15 {
            assert_eq!(
                range.contains(value),
                range.iter().any(|produced| produced == value),
                "Mismatch for {value}"
            );
        }

        assert!(!Range::new(5, 2).contains(5));
    }

    #[test]
    fn textual_form_is_parsed() {
        let cases = vec![
            ("5", Range::to(5)),
            ("2:5", Range::new(2, 5)),
            ("5:2:-1", Range::with_step(5, 2, -1).unwrap()),
            (" 1 : 10 : 2 ", Range::with_step(1, 10, 2).unwrap()),
        ];

        for (input, expected) in cases {
            let parsed = input.parse::<Range<i64>>().unwrap();
            assert_eq!(parsed, expected, "Mismatch for '{input}'");
            assert_eq!(parsed.to_string().parse::<Range<i64>>().unwrap(), expected);
        }
    }

    #[test]
    fn textual_form_with_zero_step_keeps_the_step_error() {
        let error = "1:5:0".parse::<Range<i32>>().unwrap_err();

        assert_eq!(
            error.downcast_ref::<InvalidStepError>(),
            Some(&InvalidStepError)
        );
    }

    #[test]
    fn malformed_textual_forms_are_rejected() {
        for input in ["", "a", "1:b", "1:2:3:4", "1::2", "300"] {
            assert!(
                input.parse::<Range<i8>>().is_err(),
                "'{input}' should not parse"
            );
        }
    }

    #[test]
    fn serialized_definition_defaults_start_and_step() {
        let range: Range = serde_json::from_str(r#"{ "stop": 5 }"#).unwrap();
        assert_eq!(range, Range::to(5));

        let range: Range =
            serde_json::from_str(r#"{ "start": 5, "stop": 2, "step": -1 }"#).unwrap();
        assert_eq!(range, Range::with_step(5, 2, -1).unwrap());

        assert_eq!(
            serde_json::to_value(range).unwrap(),
            serde_json::json!({ "start": 5, "stop": 2, "step": -1 })
        );
    }

    #[test]
    fn serialized_definition_with_zero_step_is_rejected() {
        let result = serde_json::from_str::<Range>(r#"{ "stop": 5, "step": 0 }"#);

        let error = result.unwrap_err().to_string();
        assert!(error.contains("must not be zero"), "{error}");
    }
}
