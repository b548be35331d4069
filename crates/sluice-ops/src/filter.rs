//! Stages that may drop elements: the lower bound falls to zero, the upper
//! bound is kept.

use std::fmt;

use sluice_core::pipe::{DoubleEndedPipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Keep the elements for which the predicate holds.
#[derive(Clone)]
pub struct Filter<P, F> {
    input: P,
    pred: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(input: P, pred: F) -> Self {
        Self { input, pred }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("input", &self.input).finish()
    }
}

impl<P, F> Pipe for Filter<P, F>
where
    P: Pipe,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        while let Some(item) = self.input.next() {
            if (self.pred)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> SizeHint {
        self.input.size_hint().unbounded_below()
    }
}

impl<P, F> DoubleEndedPipe for Filter<P, F>
where
    P: DoubleEndedPipe,
    F: FnMut(&P::Item) -> bool,
{
    fn next_back(&mut self) -> IterValue<P::Item> {
        while let Some(item) = self.input.next_back() {
            if (self.pred)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Transform each element, dropping those mapped to `None`.
#[derive(Clone)]
pub struct FilterMap<P, F> {
    input: P,
    f: F,
}

impl<P, F> FilterMap<P, F> {
    pub fn new(input: P, f: F) -> Self {
        Self { input, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for FilterMap<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap")
            .field("input", &self.input)
            .finish()
    }
}

impl<P, F, U> Pipe for FilterMap<P, F>
where
    P: Pipe,
    F: FnMut(P::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> IterValue<U> {
        while let Some(item) = self.input.next() {
            if let Some(out) = (self.f)(item) {
                return Some(out);
            }
        }
        None
    }

    fn size_hint(&self) -> SizeHint {
        self.input.size_hint().unbounded_below()
    }
}

impl<P, F, U> DoubleEndedPipe for FilterMap<P, F>
where
    P: DoubleEndedPipe,
    F: FnMut(P::Item) -> Option<U>,
{
    fn next_back(&mut self) -> IterValue<U> {
        while let Some(item) = self.input.next_back() {
            if let Some(out) = (self.f)(item) {
                return Some(out);
            }
        }
        None
    }
}
