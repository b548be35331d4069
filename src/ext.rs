//! The fluent builder: one chain method per stage, plus the terminals that
//! drive a chain to completion.
//!
//! Chain methods only wrap `self`; no element moves until a terminal (or a
//! manual `next()`) pulls.

use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;

use sluice_core::config::PipeConfig;
use sluice_core::element::RefElement;
use sluice_core::error::Result;
use sluice_core::pipe::{DoubleEndedPipe, IntoPipe, Pipe};
use sluice_ops::{
    Alternate, ByKey, ByOrder, Cast, Chain, Chunked, ChunkedExact, Cloned, Compare, Copied,
    Filter, FilterMap, FlagLast, FlatMap, Flatten, Fuse, GenerateFrom, GroupBy, Indexed,
    InplaceModifier, Intersperse, Map, Reverse, ReverseBuffered, SkipN, SkipWhile, SortOrder,
    Sorter, StepBy, TakeN, TakeWhile, Unique, Zip,
};
use sluice_sources::generator::Generator;
use sluice_sources::{repeat, repeat_with, Repeat, RepeatWith};

use crate::collect::CollectTarget;
use crate::trace;

/// Lossy widening to `f64`, used by [`PipeExt::mean`].
///
/// Covers every primitive number, including the 64- and 128-bit integers
/// that have no `Into<f64>`; those round to the nearest representable value.
pub trait AsF64 {
    fn as_f64(self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($t:ty),*) => {$(
        impl AsF64 for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Builder and terminal methods for every [`Pipe`].
pub trait PipeExt: Pipe + Sized {
    // ----- element-wise -----

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Convert every element with `Into`.
    fn cast<U>(self) -> Cast<Self, U>
    where
        Self::Item: Into<U>,
    {
        Cast::new(self)
    }

    fn inplace_modifier<F>(self, f: F) -> InplaceModifier<Self, F>
    where
        F: FnMut(&mut Self::Item),
    {
        InplaceModifier::new(self, f)
    }

    fn cloned(self) -> Cloned<Self>
    where
        Self::Item: RefElement,
    {
        Cloned::new(self)
    }

    fn copied(self) -> Copied<Self>
    where
        Self::Item: RefElement,
        <Self::Item as RefElement>::Target: Copy,
    {
        Cloned::new(self)
    }

    fn indexed(self) -> Indexed<Self> {
        Indexed::new(self)
    }

    fn flag_last(self) -> FlagLast<Self> {
        FlagLast::new(self)
    }

    /// Never pull upstream again after its first `None`.
    fn fuse(self) -> Fuse<Self> {
        Fuse::new(self)
    }

    // ----- filtering -----

    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, f)
    }

    /// Keep the first element for each key.
    fn unique<K, F>(self, key_fn: F) -> Unique<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        Unique::new(self, key_fn)
    }

    /// `unique` keyed on the element itself.
    fn distinct(self) -> Unique<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self::Item: Clone + Hash + Eq,
    {
        let key: fn(&Self::Item) -> Self::Item = Clone::clone;
        Unique::new(self, key)
    }

    // ----- prefixes and strides -----

    fn skip_n(self, n: usize) -> SkipN<Self> {
        SkipN::new(self, n)
    }

    fn skip_while<F>(self, pred: F) -> SkipWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    fn take_n(self, n: usize) -> TakeN<Self> {
        TakeN::new(self, n)
    }

    fn take_while<F>(self, pred: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    fn step_by(self, step: usize) -> Result<StepBy<Self>> {
        StepBy::new(self, step)
    }

    // ----- expansion -----

    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        U: IntoPipe,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: IntoPipe,
    {
        Flatten::new(self)
    }

    /// Run the generator `f` builds for each element; yields its values as
    /// `Ok` and stops after the first fault.
    fn generate_from<G, F>(self, f: F) -> GenerateFrom<Self, F, G>
    where
        F: FnMut(Self::Item) -> G,
        G: Generator,
    {
        GenerateFrom::new(self, f)
    }

    // ----- combining -----

    fn chain<O>(self, other: O) -> Chain<Self, O::IntoPipe>
    where
        O: IntoPipe<Item = Self::Item>,
    {
        Chain::new(self, other.into_pipe())
    }

    fn zip<O: IntoPipe>(self, other: O) -> Zip<Self, O::IntoPipe> {
        Zip::new(self, other.into_pipe())
    }

    fn alternate<O>(self, other: O) -> Alternate<Self, O::IntoPipe>
    where
        O: IntoPipe<Item = Self::Item>,
    {
        Alternate::new(self, other.into_pipe())
    }

    /// Clone `sep` between consecutive elements.
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self, Repeat<Self::Item>>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, repeat(sep))
    }

    /// Call `f` for each separator.
    fn intersperse_with<F>(self, f: F) -> Intersperse<Self, RepeatWith<F>>
    where
        F: FnMut() -> Self::Item,
    {
        Intersperse::new(self, repeat_with(f))
    }

    /// Take separators from another pipe; the stage ends if it runs dry.
    fn intersperse_from<S>(self, separators: S) -> Intersperse<Self, S::IntoPipe>
    where
        S: IntoPipe<Item = Self::Item>,
    {
        Intersperse::new(self, separators.into_pipe())
    }

    // ----- buffering -----

    fn chunked(self, size: usize) -> Result<Chunked<Self>> {
        Chunked::new(self, size)
    }

    /// Windows of exactly `size` elements starting every `step` elements.
    fn chunked_exact(self, size: usize, step: usize) -> Result<ChunkedExact<Self>>
    where
        Self::Item: Clone,
    {
        ChunkedExact::new(self, size, step)
    }

    fn sorter<C>(self, cmp: C, stable: bool) -> Sorter<Self, C>
    where
        C: Compare<Self::Item>,
    {
        Sorter::new(self, cmp, stable)
    }

    /// Ascending natural order; stability from `PipeConfig::global()`.
    fn sorted(self) -> Sorter<Self, ByOrder>
    where
        Self::Item: Ord,
    {
        self.sorted_with(SortOrder::Ascending, PipeConfig::global().stable_sort)
    }

    fn sorted_with(self, order: SortOrder, stable: bool) -> Sorter<Self, ByOrder>
    where
        Self::Item: Ord,
    {
        Sorter::new(self, ByOrder(order), stable)
    }

    fn sorted_by_key<K, F>(self, key: F, order: SortOrder) -> Sorter<Self, ByKey<F>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let stable = PipeConfig::global().stable_sort;
        Sorter::new(self, ByKey::new(key, order), stable)
    }

    fn group_by<K, F>(self, key_fn: F) -> GroupBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        GroupBy::new(self, key_fn)
    }

    fn reverse(self) -> Reverse<Self>
    where
        Self: DoubleEndedPipe,
    {
        Reverse::new(self)
    }

    /// Reverse any pipe by reading it fully on the first pull.
    fn reverse_buffered(self) -> ReverseBuffered<Self> {
        ReverseBuffered::new(self)
    }

    // ----- terminals: collection -----

    /// Drain into a new container, pre-sized from the size hint.
    fn collect_into<C>(self) -> C
    where
        C: CollectTarget<Self::Item>,
    {
        self.collect_with(PipeConfig::global())
    }

    fn collect_with<C>(mut self, cfg: &PipeConfig) -> C
    where
        C: CollectTarget<Self::Item>,
    {
        let hint = self.size_hint();
        let reserved = hint.expected_result_size(cfg.max_reserve);
        trace::collect_presized(std::any::type_name::<C>(), reserved, hint);
        let mut out = C::with_capacity_hint(reserved);
        while let Some(item) = self.next() {
            out.insert(item);
        }
        out
    }

    /// Append every element to an existing container.
    fn extend_into<C>(mut self, target: &mut C)
    where
        C: CollectTarget<Self::Item>,
    {
        let hint = self.size_hint();
        target.reserve_hint(hint.expected_result_size(PipeConfig::global().max_reserve));
        while let Some(item) = self.next() {
            target.insert(item);
        }
    }

    /// `(Vec<A>, Vec<B>)` from a pipe of pairs.
    fn unzip<A, B>(mut self) -> (Vec<A>, Vec<B>)
    where
        Self: Pipe<Item = (A, B)>,
    {
        let cap = self
            .size_hint()
            .expected_result_size(PipeConfig::global().max_reserve);
        let mut left = Vec::with_capacity(cap);
        let mut right = Vec::with_capacity(cap);
        while let Some((a, b)) = self.next() {
            left.push(a);
            right.push(b);
        }
        (left, right)
    }

    /// Display every element, separated by `sep`.
    fn string_join(mut self, sep: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        if let Some(first) = self.next() {
            out.push_str(&first.to_string());
            while let Some(item) = self.next() {
                out.push_str(sep);
                out.push_str(&item.to_string());
            }
        }
        out
    }

    // ----- terminals: reductions -----

    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            f(item);
        }
    }

    fn count(mut self) -> usize {
        let mut n = 0;
        while self.next().is_some() {
            n += 1;
        }
        n
    }

    fn count_where<F>(self, mut pred: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.fold(0, |n, item| if pred(&item) { n + 1 } else { n })
    }

    /// First element satisfying `pred`; stops pulling once found.
    fn find<F>(&mut self, mut pred: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Index of the first element satisfying `pred`.
    fn find_idx<F>(&mut self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut idx = 0;
        while let Some(item) = self.next() {
            if pred(&item) {
                return Some(idx);
            }
            idx += 1;
        }
        None
    }

    /// Index of the first element equal to `needle`.
    fn position_of<Q>(&mut self, needle: &Q) -> Option<usize>
    where
        Self::Item: PartialEq<Q>,
        Q: ?Sized,
    {
        self.find_idx(|item| item == needle)
    }

    fn any<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(item) {
                return true;
            }
        }
        false
    }

    fn all<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !pred(item) {
                return false;
            }
        }
        true
    }

    fn last(self) -> Option<Self::Item> {
        self.fold(None, |_, item| Some(item))
    }

    /// Element at position `n`, skipping through `advance_by`.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.advance_by(n) < n {
            return None;
        }
        self.next()
    }

    /// Smallest element; the first of equal minima.
    fn min(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.reduce(|best, item| if item < best { item } else { best })
    }

    /// Largest element; the last of equal maxima.
    fn max(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.reduce(|best, item| if item >= best { item } else { best })
    }

    fn min_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .reduce(|best, cur| if cur.0 < best.0 { cur } else { best })
            .map(|(_, item)| item)
    }

    fn max_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .reduce(|best, cur| if cur.0 >= best.0 { cur } else { best })
            .map(|(_, item)| item)
    }

    /// Combine elements pairwise from the left; `None` on an empty pipe.
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Sum of all elements; `None` on an empty pipe.
    fn sum(self) -> Option<Self::Item>
    where
        Self::Item: Add<Output = Self::Item>,
    {
        self.reduce(|a, b| a + b)
    }

    /// Arithmetic mean as `f64`; `None` on an empty pipe.
    fn mean(self) -> Option<f64>
    where
        Self::Item: AsF64,
    {
        let (sum, n) = self.fold((0.0_f64, 0usize), |(sum, n), item| {
            (sum + item.as_f64(), n + 1)
        });
        (n > 0).then(|| sum / n as f64)
    }

    // ----- terminals: fallible elements -----

    /// Feed `Ok` values to `f`; the first `Err` (from the pipe or from `f`)
    /// stops the drain and is returned.
    fn try_for_each<T, E, F>(mut self, mut f: F) -> std::result::Result<(), E>
    where
        Self: Pipe<Item = std::result::Result<T, E>>,
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        while let Some(item) = self.next() {
            f(item?)?;
        }
        Ok(())
    }

    fn try_fold<T, E, B, F>(mut self, init: B, mut f: F) -> std::result::Result<B, E>
    where
        Self: Pipe<Item = std::result::Result<T, E>>,
        F: FnMut(B, T) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Collect `Ok` values, or return the first `Err` without pulling
    /// further.
    fn try_collect<T, E, C>(mut self) -> std::result::Result<C, E>
    where
        Self: Pipe<Item = std::result::Result<T, E>>,
        C: CollectTarget<T>,
    {
        let cap = self
            .size_hint()
            .expected_result_size(PipeConfig::global().max_reserve);
        let mut out = C::with_capacity_hint(cap);
        while let Some(item) = self.next() {
            out.insert(item?);
        }
        Ok(out)
    }
}

impl<P: Pipe> PipeExt for P {}
