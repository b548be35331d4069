//! Repeating sources: one value, or whatever a closure returns.

use std::fmt;

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Clones of one value, forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Pipe for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::infinite()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        n
    }
}

/// Values from a closure, forever.
pub struct RepeatWith<F> {
    f: F,
}

pub fn repeat_with<T, F: FnMut() -> T>(f: F) -> RepeatWith<F> {
    RepeatWith { f }
}

impl<F> fmt::Debug for RepeatWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RepeatWith")
    }
}

impl<T, F: FnMut() -> T> Pipe for RepeatWith<F> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        Some((self.f)())
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::infinite()
    }
}

/// Clones of one value, `n` times.
///
/// The value is moved out on the final pull instead of cloned.
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    value: Option<T>,
    remaining: usize,
}

pub fn repeat_n<T: Clone>(value: T, n: usize) -> RepeatN<T> {
    RepeatN {
        value: if n == 0 { None } else { Some(value) },
        remaining: n,
    }
}

impl<T: Clone> RepeatN<T> {
    fn take_one(&mut self) -> IterValue<T> {
        match self.remaining {
            0 => None,
            1 => {
                self.remaining = 0;
                self.value.take()
            }
            _ => {
                self.remaining -= 1;
                self.value.clone()
            }
        }
    }
}

impl<T: Clone> Pipe for RepeatN<T> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        self.take_one()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.remaining)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.remaining);
        self.remaining -= skipped;
        if self.remaining == 0 {
            self.value = None;
        }
        skipped
    }
}

impl<T: Clone> DoubleEndedPipe for RepeatN<T> {
    fn next_back(&mut self) -> IterValue<T> {
        self.take_one()
    }
}

impl<T: Clone> ExactSizePipe for RepeatN<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
