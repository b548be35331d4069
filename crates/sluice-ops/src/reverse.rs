//! Back-to-front iteration.
//!
//! [`Reverse`] swaps the ends of a double-ended input and buffers nothing.
//! [`ReverseBuffered`] accepts any input and reads all of it on the first
//! pull.

use std::fmt;

use sluice_core::config::PipeConfig;
use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

use crate::trace;

#[derive(Debug, Clone)]
pub struct Reverse<P> {
    input: P,
}

impl<P> Reverse<P> {
    pub fn new(input: P) -> Self {
        Self { input }
    }

    pub fn into_inner(self) -> P {
        self.input
    }
}

impl<P: DoubleEndedPipe> Pipe for Reverse<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        self.input.next_back()
    }

    fn size_hint(&self) -> SizeHint {
        self.input.size_hint()
    }
}

impl<P: DoubleEndedPipe> DoubleEndedPipe for Reverse<P> {
    fn next_back(&mut self) -> IterValue<P::Item> {
        self.input.next()
    }
}

impl<P: DoubleEndedPipe + ExactSizePipe> ExactSizePipe for Reverse<P> {
    fn len(&self) -> usize {
        self.input.len()
    }
}

pub struct ReverseBuffered<P: Pipe> {
    input: Option<P>,
    /// Input order; elements are popped off the end.
    buf: Vec<P::Item>,
}

impl<P: Pipe> ReverseBuffered<P> {
    pub fn new(input: P) -> Self {
        Self {
            input: Some(input),
            buf: Vec::new(),
        }
    }

    fn materialize(&mut self) {
        let Some(mut input) = self.input.take() else {
            return;
        };
        let cap = input
            .size_hint()
            .expected_result_size(PipeConfig::global().max_reserve);
        self.buf.reserve(cap);
        while let Some(item) = input.next() {
            self.buf.push(item);
        }
        trace::materialized("reverse_buffered", &[("elements", self.buf.len())]);
    }
}

impl<P: Pipe + fmt::Debug> fmt::Debug for ReverseBuffered<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseBuffered")
            .field("input", &self.input)
            .field("buffered", &self.buf.len())
            .finish()
    }
}

impl<P: Pipe> Pipe for ReverseBuffered<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        self.materialize();
        self.buf.pop()
    }

    fn size_hint(&self) -> SizeHint {
        match &self.input {
            Some(input) => input.size_hint(),
            None => SizeHint::exact(self.buf.len()),
        }
    }
}

impl<P: ExactSizePipe> ExactSizePipe for ReverseBuffered<P> {
    fn len(&self) -> usize {
        match &self.input {
            Some(input) => input.len(),
            None => self.buf.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::source::{from_iter, from_ref};

    #[test]
    fn test_reverse_twice_is_identity() {
        let data = [1, 2, 3];
        let mut twice = Reverse::new(Reverse::new(from_ref(&data)));
        assert_eq!(twice.len(), 3);
        assert_eq!(twice.next(), Some(&1));
        assert_eq!(twice.next_back(), Some(&3));
        assert_eq!(twice.next(), Some(&2));
        assert_eq!(twice.next(), None);
    }

    #[test]
    fn test_buffered_reverse_of_single_ended_input() {
        let evens = from_iter((0..7).filter(|x| x % 2 == 0));
        let mut r = ReverseBuffered::new(evens);
        assert_eq!(r.next(), Some(6));
        assert_eq!(r.size_hint(), SizeHint::exact(3));
        assert_eq!(r.next(), Some(4));
        assert_eq!(r.next(), Some(2));
        assert_eq!(r.next(), Some(0));
        assert_eq!(r.next(), None);
    }
}
