//! Arithmetic sequences: `range(start, end, step)`, end exclusive.
//!
//! The element count is computed once from the bounds; afterwards the range
//! is a pair of indices, so it is double-ended and exact-size and can skip
//! in O(1).

use sluice_core::error::{Error, Result};
use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Numeric types a [`Range`] can step through.
pub trait RangeValue: Copy + PartialOrd {
    fn is_zero_step(step: Self) -> bool;

    /// Number of values `start + k*step` strictly before `end`.
    fn span_count(start: Self, end: Self, step: Self) -> usize;

    /// `start + step * idx`; only called for `idx < span_count`.
    fn nth_from(start: Self, step: Self, idx: usize) -> Self;
}

macro_rules! impl_range_value_signed {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            fn is_zero_step(step: Self) -> bool {
                step == 0
            }

            fn span_count(start: Self, end: Self, step: Self) -> usize {
                let ascending = step > 0;
                if (ascending && start >= end) || (!ascending && start <= end) {
                    return 0;
                }
                let dist = start.abs_diff(end) as u128;
                let stride = step.unsigned_abs() as u128;
                usize::try_from(dist.div_ceil(stride)).unwrap_or(usize::MAX)
            }

            fn nth_from(start: Self, step: Self, idx: usize) -> Self {
                // The true value is in range, so modular arithmetic is exact.
                start.wrapping_add(step.wrapping_mul(idx as Self))
            }
        }
    )*};
}

macro_rules! impl_range_value_unsigned {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            fn is_zero_step(step: Self) -> bool {
                step == 0
            }

            fn span_count(start: Self, end: Self, step: Self) -> usize {
                if start >= end {
                    return 0;
                }
                let dist = (end - start) as u128;
                usize::try_from(dist.div_ceil(step as u128)).unwrap_or(usize::MAX)
            }

            fn nth_from(start: Self, step: Self, idx: usize) -> Self {
                start.wrapping_add(step.wrapping_mul(idx as Self))
            }
        }
    )*};
}

macro_rules! impl_range_value_float {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            fn is_zero_step(step: Self) -> bool {
                step == 0.0 || step.is_nan()
            }

            fn span_count(start: Self, end: Self, step: Self) -> usize {
                let heads_to_end = (step > 0.0 && start < end) || (step < 0.0 && start > end);
                if !heads_to_end {
                    return 0;
                }
                // `start` itself is always in range; the quotient may underflow
                // to zero or overflow to NaN for huge steps.
                let span = (end - start) / step;
                if span.is_infinite() {
                    return usize::MAX;
                }
                if !(span >= 1.0) {
                    return 1;
                }
                span.ceil() as usize
            }

            fn nth_from(start: Self, step: Self, idx: usize) -> Self {
                // An infinite step times zero is NaN.
                if idx == 0 {
                    return start;
                }
                start + step * idx as $t
            }
        }
    )*};
}

impl_range_value_signed!(i8, i16, i32, i64, i128, isize);
impl_range_value_unsigned!(u8, u16, u32, u64, u128, usize);
impl_range_value_float!(f32, f64);

/// Arithmetic sequence from `start` (inclusive) towards `end` (exclusive).
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: T,
    step: T,
    front: usize,
    back: usize,
}

/// Build `start, start+step, …` up to but excluding `end`.
///
/// A negative step counts down. A zero step is rejected because the range
/// could never reach `end`.
pub fn range<T: RangeValue>(start: T, end: T, step: T) -> Result<Range<T>> {
    if T::is_zero_step(step) {
        return Err(Error::InvalidStep { op: "range" });
    }
    Ok(Range {
        start,
        step,
        front: 0,
        back: T::span_count(start, end, step),
    })
}

impl<T: RangeValue> Pipe for Range<T> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        if self.front >= self.back {
            return None;
        }
        let value = T::nth_from(self.start, self.step, self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.back - self.front)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.back - self.front);
        self.front += skipped;
        skipped
    }
}

impl<T: RangeValue> DoubleEndedPipe for Range<T> {
    fn next_back(&mut self) -> IterValue<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(T::nth_from(self.start, self.step, self.back))
    }
}

impl<T: RangeValue> ExactSizePipe for Range<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
