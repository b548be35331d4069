//! Container sources: the starting point of every chain.
//!
//! Three ownership modes, each built on the container's own std iteration:
//! - [`from_mut`]: yields `&mut T` into the live container.
//! - [`from_ref`]: yields `&T`; the container is untouched.
//! - [`from_owned`] / [`from_taken`]: yields `T`, moving elements out.
//!
//! Size hints come straight from the container iterator, so `Vec`, slices,
//! `VecDeque`, maps and sets report exact lengths.

use std::fmt;
use std::iter::Fuse;
use std::marker::PhantomData;

use crate::element::{Borrowed, BorrowedMut, Mode, Owned, Ownership};
use crate::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use crate::size_hint::SizeHint;

/// Cursor over a container, tagged with its ownership mode `M`.
pub struct Source<I, M> {
    iter: Fuse<I>,
    _mode: PhantomData<M>,
}

impl<I: Iterator, M: Mode> Source<I, M> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            _mode: PhantomData,
        }
    }

    /// Ownership category of every element this source yields.
    pub fn ownership(&self) -> Ownership {
        M::OWNERSHIP
    }
}

impl<I: Clone, M> Clone for Source<I, M> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _mode: PhantomData,
        }
    }
}

impl<I: fmt::Debug, M: Mode> fmt::Debug for Source<I, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("ownership", &M::OWNERSHIP)
            .field("iter", &self.iter)
            .finish()
    }
}

impl<I: Iterator, M: Mode> Pipe for Source<I, M> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> IterValue<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().into()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // With an exact length, `nth` lets slice-backed iterators seek.
        let (lower, upper) = self.iter.size_hint();
        if upper == Some(lower) {
            let skipped = n.min(lower);
            if skipped > 0 {
                self.iter.nth(skipped - 1);
            }
            return skipped;
        }
        let mut skipped = 0;
        while skipped < n && self.iter.next().is_some() {
            skipped += 1;
        }
        skipped
    }
}

impl<I: DoubleEndedIterator, M: Mode> DoubleEndedPipe for Source<I, M> {
    #[inline]
    fn next_back(&mut self) -> IterValue<Self::Item> {
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator, M: Mode> ExactSizePipe for Source<I, M> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// Iterate a container through immutable references.
pub fn from_ref<'a, C>(container: &'a C) -> Source<<&'a C as IntoIterator>::IntoIter, Borrowed>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Source::new(container.into_iter())
}

/// Iterate a container through mutable references; writes land in the
/// container.
pub fn from_mut<'a, C>(
    container: &'a mut C,
) -> Source<<&'a mut C as IntoIterator>::IntoIter, BorrowedMut>
where
    C: ?Sized,
    &'a mut C: IntoIterator,
{
    Source::new(container.into_iter())
}

/// Move a container into the chain; elements are yielded by value.
pub fn from_owned<C: IntoIterator>(container: C) -> Source<C::IntoIter, Owned> {
    Source::new(container.into_iter())
}

/// Move the contents out of `container`, leaving it empty.
pub fn from_taken<C>(container: &mut C) -> Source<C::IntoIter, Owned>
where
    C: IntoIterator + Default,
{
    from_owned(std::mem::take(container))
}

/// Wrap an arbitrary std iterator; its items are treated as owned.
pub fn from_iter<I: IntoIterator>(iter: I) -> Source<I::IntoIter, Owned> {
    Source::new(iter.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_advance_by_seeks_on_exact_sources() {
        let data = [1, 2, 3, 4, 5];
        let mut src = from_ref(&data[..]);
        assert_eq!(src.advance_by(3), 3);
        assert_eq!(src.next(), Some(&4));
        assert_eq!(src.advance_by(9), 1);
        assert_eq!(src.next(), None);
    }

    #[test]
    fn test_advance_by_on_inexact_source() {
        let mut src = from_iter((0..10).filter(|x| x % 3 == 0));
        assert_eq!(src.advance_by(2), 2);
        assert_eq!(src.next(), Some(6));
        assert_eq!(src.advance_by(5), 1);
    }

    #[test]
    fn test_sources_report_ownership() {
        let mut v = vec![1, 2];
        assert_eq!(from_ref(&v).ownership(), Ownership::Immutable);
        assert_eq!(from_mut(&mut v).ownership(), Ownership::Mutable);
        assert_eq!(from_owned(v).ownership(), Ownership::Owned);
    }

    #[test]
    fn test_set_source_is_exact() {
        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        let src = from_ref(&set);
        assert_eq!(src.len(), 3);
        assert!(!src.is_empty());
    }
}
