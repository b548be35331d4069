//! Dropping a prefix: by count or while a predicate holds.

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Drop the first `n` elements.
///
/// The skip happens on the first pull, through the upstream's
/// `advance_by`, so seekable sources do not touch the skipped elements.
#[derive(Debug, Clone)]
pub struct SkipN<P> {
    input: P,
    pending: usize,
}

impl<P> SkipN<P> {
    pub fn new(input: P, n: usize) -> Self {
        Self { input, pending: n }
    }
}

impl<P: Pipe> SkipN<P> {
    fn settle(&mut self) {
        if self.pending > 0 {
            self.input.advance_by(self.pending);
            self.pending = 0;
        }
    }
}

impl<P: Pipe> Pipe for SkipN<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        self.settle();
        self.input.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.input.size_hint().subtract(self.pending)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.settle();
        self.input.advance_by(n)
    }
}

impl<P: DoubleEndedPipe + ExactSizePipe> DoubleEndedPipe for SkipN<P> {
    fn next_back(&mut self) -> IterValue<P::Item> {
        // Elements still owed to the front skip must not come out the back.
        if self.len() == 0 {
            return None;
        }
        self.input.next_back()
    }
}

impl<P: ExactSizePipe> ExactSizePipe for SkipN<P> {
    fn len(&self) -> usize {
        self.input.len().saturating_sub(self.pending)
    }
}

/// Drop the leading run of elements matching `pred`; pass the rest.
///
/// `pred` is not called again once it has returned `false`.
#[derive(Clone)]
pub struct SkipWhile<P, F> {
    input: P,
    pred: F,
    skipping: bool,
}

impl<P, F> SkipWhile<P, F> {
    pub fn new(input: P, pred: F) -> Self {
        Self {
            input,
            pred,
            skipping: true,
        }
    }
}

impl<P, F> Pipe for SkipWhile<P, F>
where
    P: Pipe,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        if !self.skipping {
            return self.input.next();
        }
        loop {
            let item = self.input.next()?;
            if !(self.pred)(&item) {
                self.skipping = false;
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self.input.size_hint();
        if self.skipping {
            hint.unbounded_below()
        } else {
            hint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::source::{from_iter, from_ref};

    #[test]
    fn test_skip_n_seeks_and_reports_hint() {
        let data = [0, 1, 2, 3, 4, 5];
        let mut s = SkipN::new(from_ref(&data), 4);
        assert_eq!(s.size_hint(), SizeHint::exact(2));
        assert_eq!(s.next(), Some(&4));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_skip_n_back_does_not_eat_skipped_prefix() {
        let mut s = SkipN::new(from_iter(vec![1, 2, 3]), 2);
        assert_eq!(s.next_back(), Some(3));
        assert_eq!(s.next_back(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_skip_n_past_end() {
        let mut s = SkipN::new(from_iter(vec![1, 2]), 5);
        assert_eq!(s.size_hint(), SizeHint::exact(0));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_skip_while_only_leading_run() {
        let mut s = SkipWhile::new(from_iter(vec![1, 2, 5, 1, 7]), |x: &i32| *x < 3);
        assert_eq!(s.size_hint(), SizeHint::new(0, Some(5)));
        assert_eq!(s.next(), Some(5));
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.size_hint(), SizeHint::exact(1));
        assert_eq!(s.next(), Some(7));
        assert_eq!(s.next(), None);
    }
}
