//! The pull protocol every stage implements.
//!
//! A terminal operation calls [`Pipe::next`] on the outermost stage; each
//! stage pulls from its chain input on demand and returns either an element
//! or `None` (end of sequence). Two optional extensions refine the contract:
//! [`DoubleEndedPipe`] (pull from the back) and [`ExactSizePipe`] (remaining
//! length is known precisely).
//!
//! Invariants:
//! - Once `next` has returned `None`, every later call returns `None`.
//! - `size_hint` is advisory; it must be sound (the real remaining count is
//!   within the bounds) but may be loose.

use std::collections::VecDeque;

use crate::element::Owned;
use crate::size_hint::SizeHint;
use crate::source::Source;

/// The value handed out by a single "produce next" call.
pub type IterValue<T> = Option<T>;

/// Pull-based producer of a sequence of `Item`s.
pub trait Pipe {
    type Item;

    /// Produce the next element, or `None` once the sequence is exhausted.
    fn next(&mut self) -> IterValue<Self::Item>;

    /// Bounds on the number of elements still to come.
    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }

    /// Skip up to `n` elements; returns how many were actually skipped.
    ///
    /// Sources that can seek override this; the default pulls and drops.
    fn advance_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next().is_none() {
                return skipped;
            }
        }
        n
    }

    /// Borrow this pipe so a stage can be attached without giving it up.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Bridge into `std::iter::Iterator` (for loops, std adapters).
    fn into_std(self) -> PipeIter<Self>
    where
        Self: Sized,
    {
        PipeIter::new(self)
    }
}

/// A pipe that can also produce elements from the back.
///
/// Front and back pulls may be interleaved freely; they meet in the middle.
pub trait DoubleEndedPipe: Pipe {
    fn next_back(&mut self) -> IterValue<Self::Item>;
}

/// A pipe whose remaining length is known exactly.
pub trait ExactSizePipe: Pipe {
    fn len(&self) -> usize {
        let hint = self.size_hint();
        debug_assert!(hint.is_exact(), "exact-size pipe reported {hint}");
        hint.lower
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: Pipe + ?Sized> Pipe for &mut P {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        (**self).advance_by(n)
    }
}

impl<P: DoubleEndedPipe + ?Sized> DoubleEndedPipe for &mut P {
    fn next_back(&mut self) -> IterValue<Self::Item> {
        (**self).next_back()
    }
}

impl<P: ExactSizePipe + ?Sized> ExactSizePipe for &mut P {
    fn len(&self) -> usize {
        (**self).len()
    }
}

// ----- conversion into a pipe -----

/// Conversion into a [`Pipe`]. Used wherever a stage accepts "something
/// iterable": `flat_map` bodies, `chain` arguments, N-ary combinators.
pub trait IntoPipe {
    type Item;
    type IntoPipe: Pipe<Item = Self::Item>;

    fn into_pipe(self) -> Self::IntoPipe;
}

impl<P: Pipe> IntoPipe for P {
    type Item = P::Item;
    type IntoPipe = P;

    fn into_pipe(self) -> P {
        self
    }
}

impl<T> IntoPipe for Vec<T> {
    type Item = T;
    type IntoPipe = Source<std::vec::IntoIter<T>, Owned>;

    fn into_pipe(self) -> Self::IntoPipe {
        Source::new(self.into_iter())
    }
}

impl<T> IntoPipe for VecDeque<T> {
    type Item = T;
    type IntoPipe = Source<std::collections::vec_deque::IntoIter<T>, Owned>;

    fn into_pipe(self) -> Self::IntoPipe {
        Source::new(self.into_iter())
    }
}

impl<T> IntoPipe for Option<T> {
    type Item = T;
    type IntoPipe = Source<std::option::IntoIter<T>, Owned>;

    fn into_pipe(self) -> Self::IntoPipe {
        Source::new(self.into_iter())
    }
}

impl<T, const N: usize> IntoPipe for [T; N] {
    type Item = T;
    type IntoPipe = Source<std::array::IntoIter<T, N>, Owned>;

    fn into_pipe(self) -> Self::IntoPipe {
        Source::new(self.into_iter())
    }
}

// ----- bridge to std -----

/// Adapter exposing a pipe as a `std::iter::Iterator`.
#[derive(Debug, Clone)]
pub struct PipeIter<P> {
    pipe: P,
}

impl<P> PipeIter<P> {
    pub fn new(pipe: P) -> Self {
        Self { pipe }
    }

    pub fn into_inner(self) -> P {
        self.pipe
    }
}

impl<P: Pipe> Iterator for PipeIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pipe.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pipe.size_hint().as_tuple()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.pipe.advance_by(n) < n {
            return None;
        }
        self.pipe.next()
    }
}

impl<P: DoubleEndedPipe> DoubleEndedIterator for PipeIter<P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.pipe.next_back()
    }
}

impl<P: ExactSizePipe> ExactSizeIterator for PipeIter<P> {}
