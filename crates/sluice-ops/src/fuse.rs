//! Enforce idempotent exhaustion over an arbitrary upstream.

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Drops its upstream at the first `None`, so it is never pulled again.
#[derive(Debug, Clone)]
pub struct Fuse<P> {
    input: Option<P>,
}

impl<P> Fuse<P> {
    pub fn new(input: P) -> Self {
        Self { input: Some(input) }
    }
}

impl<P: Pipe> Pipe for Fuse<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        let item = self.input.as_mut()?.next();
        if item.is_none() {
            self.input = None;
        }
        item
    }

    fn size_hint(&self) -> SizeHint {
        self.input.as_ref().map_or(SizeHint::exact(0), Pipe::size_hint)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let Some(input) = self.input.as_mut() else {
            return 0;
        };
        let skipped = input.advance_by(n);
        if skipped < n {
            self.input = None;
        }
        skipped
    }
}

impl<P: DoubleEndedPipe> DoubleEndedPipe for Fuse<P> {
    fn next_back(&mut self) -> IterValue<P::Item> {
        let item = self.input.as_mut()?.next_back();
        if item.is_none() {
            self.input = None;
        }
        item
    }
}

impl<P: ExactSizePipe> ExactSizePipe for Fuse<P> {
    fn len(&self) -> usize {
        self.input.as_ref().map_or(0, ExactSizePipe::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields 1, None, 3, None, ...
    struct Flaky(u8);

    impl Pipe for Flaky {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            self.0 += 1;
            (self.0 % 2 == 1).then_some(self.0)
        }
    }

    #[test]
    fn test_fuse_stops_resurrection() {
        let mut f = Fuse::new(Flaky(0));
        assert_eq!(f.next(), Some(1));
        assert_eq!(f.next(), None);
        assert_eq!(f.next(), None);
        assert_eq!(f.size_hint(), SizeHint::exact(0));
    }
}
