//! Advisory bounds on the remaining length of a pipe.
//!
//! Every stage derives its own hint from its upstream's hint. Consumers use
//! the result only to pre-size outputs; nothing relies on it for correctness.

use std::fmt;

/// Lower bound plus optional upper bound on the number of remaining elements.
///
/// Invariant: when `upper` is present, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeHint {
    pub lower: usize,
    pub upper: Option<usize>,
}

impl SizeHint {
    /// Lower bound reported by sources that never end.
    pub const INFINITE: usize = usize::MAX;

    pub const fn new(lower: usize, upper: Option<usize>) -> Self {
        Self { lower, upper }
    }

    pub const fn exact(n: usize) -> Self {
        Self {
            lower: n,
            upper: Some(n),
        }
    }

    pub const fn unknown() -> Self {
        Self {
            lower: 0,
            upper: None,
        }
    }

    pub const fn infinite() -> Self {
        Self {
            lower: Self::INFINITE,
            upper: None,
        }
    }

    /// Both bounds agree, so the remaining length is known exactly.
    pub fn is_exact(&self) -> bool {
        self.upper == Some(self.lower)
    }

    /// Number of slots worth reserving, never more than `cap`.
    ///
    /// Prefers the upper bound when known since it is what a full drain
    /// will need; falls back to the lower bound.
    pub fn expected_result_size(&self, cap: usize) -> usize {
        self.upper.unwrap_or(self.lower).min(cap)
    }

    /// Larger of two upper bounds; a missing bound counts as unbounded.
    pub fn max_upper(a: Option<usize>, b: Option<usize>) -> Option<usize> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        }
    }

    /// Smaller of two upper bounds; a missing bound does not constrain.
    pub fn min_upper(a: Option<usize>, b: Option<usize>) -> Option<usize> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Element-wise sum. The upper bound is lost if either side lacks one
    /// or the sum overflows.
    pub fn add(self, other: SizeHint) -> SizeHint {
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        SizeHint::new(self.lower.saturating_add(other.lower), upper)
    }

    /// Remove `n` elements from both bounds, saturating at zero.
    pub fn subtract(self, n: usize) -> SizeHint {
        SizeHint::new(
            self.lower.saturating_sub(n),
            self.upper.map(|u| u.saturating_sub(n)),
        )
    }

    /// Clamp both bounds to at most `n`.
    pub fn cap(self, n: usize) -> SizeHint {
        SizeHint::new(self.lower.min(n), Self::min_upper(self.upper, Some(n)))
    }

    /// Keep the upper bound but drop the lower bound to zero.
    pub fn unbounded_below(self) -> SizeHint {
        SizeHint::new(0, self.upper)
    }

    /// Apply `f` to both bounds.
    pub fn map_bounds(self, f: impl Fn(usize) -> usize) -> SizeHint {
        SizeHint::new(f(self.lower), self.upper.map(f))
    }

    /// Std-style `(lower, upper)` tuple.
    pub fn as_tuple(&self) -> (usize, Option<usize>) {
        (self.lower, self.upper)
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<(usize, Option<usize>)> for SizeHint {
    fn from((lower, upper): (usize, Option<usize>)) -> Self {
        SizeHint::new(lower, upper)
    }
}

impl From<SizeHint> for (usize, Option<usize>) {
    fn from(hint: SizeHint) -> Self {
        hint.as_tuple()
    }
}

impl fmt::Display for SizeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "[{}, {}]", self.lower, upper),
            None => write!(f, "[{}, ..)", self.lower),
        }
    }
}
