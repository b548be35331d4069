//! Zero- and one-element sources.

use std::marker::PhantomData;

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// A pipe that yields nothing.
#[derive(Debug)]
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Pipe for Empty<T> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        None
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(0)
    }

    fn advance_by(&mut self, _n: usize) -> usize {
        0
    }
}

impl<T> DoubleEndedPipe for Empty<T> {
    fn next_back(&mut self) -> IterValue<T> {
        None
    }
}

impl<T> ExactSizePipe for Empty<T> {
    fn len(&self) -> usize {
        0
    }
}

/// A pipe that yields exactly one value.
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

pub fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

impl<T> Pipe for Once<T> {
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        self.value.take()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.len())
    }
}

impl<T> DoubleEndedPipe for Once<T> {
    fn next_back(&mut self) -> IterValue<T> {
        self.value.take()
    }
}

impl<T> ExactSizePipe for Once<T> {
    fn len(&self) -> usize {
        usize::from(self.value.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let mut e = empty::<u8>();
        assert_eq!(e.next(), None);
        assert_eq!(e.next_back(), None);
        assert_eq!(e.size_hint(), SizeHint::exact(0));
    }

    #[test]
    fn test_once() {
        let mut o = once(5);
        assert_eq!(o.len(), 1);
        assert_eq!(o.next_back(), Some(5));
        assert_eq!(o.size_hint(), SizeHint::exact(0));
        assert_eq!(o.next(), None);
    }
}
