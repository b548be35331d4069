//! Eager sorting. The first pull drains the whole input into a buffer,
//! sorts it, and then hands elements out in order.

use std::cmp::Ordering;
use std::fmt;

use sluice_core::config::PipeConfig;
use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

use crate::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Three-way comparison used by [`Sorter`].
///
/// Any `FnMut(&T, &T) -> Ordering` closure is a comparator.
pub trait Compare<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural order of `T`, optionally reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrder(pub SortOrder);

impl<T: Ord> Compare<T> for ByOrder {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.0.apply(a.cmp(b))
    }
}

/// Order by a derived key.
#[derive(Clone)]
pub struct ByKey<F> {
    key: F,
    order: SortOrder,
}

impl<F> ByKey<F> {
    pub fn new(key: F, order: SortOrder) -> Self {
        Self { key, order }
    }
}

impl<T, K, F> Compare<T> for ByKey<F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        let ka = (self.key)(a);
        let kb = (self.key)(b);
        self.order.apply(ka.cmp(&kb))
    }
}

/// Sorts its input by a comparator. `stable` keeps equal elements in
/// input order; otherwise only non-decreasing order is guaranteed.
pub struct Sorter<P: Pipe, C> {
    /// Present until the first pull.
    input: Option<P>,
    sorted: std::vec::IntoIter<P::Item>,
    cmp: C,
    stable: bool,
}

impl<P: Pipe, C> Sorter<P, C> {
    pub fn new(input: P, cmp: C, stable: bool) -> Self {
        Self {
            input: Some(input),
            sorted: Vec::new().into_iter(),
            cmp,
            stable,
        }
    }

    pub fn is_materialized(&self) -> bool {
        self.input.is_none()
    }
}

impl<P: Pipe + fmt::Debug, C> fmt::Debug for Sorter<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("input", &self.input)
            .field("buffered", &self.sorted.len())
            .field("stable", &self.stable)
            .finish()
    }
}

impl<P, C> Sorter<P, C>
where
    P: Pipe,
    C: Compare<P::Item>,
{
    fn materialize(&mut self) {
        let Some(mut input) = self.input.take() else {
            return;
        };
        let cap = input
            .size_hint()
            .expected_result_size(PipeConfig::global().max_reserve);
        let mut buf = Vec::with_capacity(cap);
        while let Some(item) = input.next() {
            buf.push(item);
        }
        let cmp = &mut self.cmp;
        if self.stable {
            buf.sort_by(|a, b| cmp.compare(a, b));
        } else {
            buf.sort_unstable_by(|a, b| cmp.compare(a, b));
        }
        trace::materialized("sorter", &[("elements", buf.len())]);
        self.sorted = buf.into_iter();
    }
}

impl<P, C> Pipe for Sorter<P, C>
where
    P: Pipe,
    C: Compare<P::Item>,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        self.materialize();
        self.sorted.next()
    }

    fn size_hint(&self) -> SizeHint {
        match &self.input {
            Some(input) => input.size_hint(),
            None => SizeHint::exact(self.sorted.len()),
        }
    }
}

impl<P, C> DoubleEndedPipe for Sorter<P, C>
where
    P: Pipe,
    C: Compare<P::Item>,
{
    fn next_back(&mut self) -> IterValue<P::Item> {
        self.materialize();
        self.sorted.next_back()
    }
}

impl<P, C> ExactSizePipe for Sorter<P, C>
where
    P: ExactSizePipe,
    C: Compare<P::Item>,
{
    fn len(&self) -> usize {
        match &self.input {
            Some(input) => input.len(),
            None => self.sorted.len(),
        }
    }
}
