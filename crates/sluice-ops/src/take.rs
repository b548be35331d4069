//! Keeping a prefix: by count or while a predicate holds. Both stop pulling
//! upstream the moment the prefix ends.

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Yield at most `n` elements.
#[derive(Debug, Clone)]
pub struct TakeN<P> {
    input: P,
    remaining: usize,
}

impl<P> TakeN<P> {
    pub fn new(input: P, n: usize) -> Self {
        Self {
            input,
            remaining: n,
        }
    }
}

impl<P: Pipe> Pipe for TakeN<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.input.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        self.input.size_hint().cap(self.remaining)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let want = n.min(self.remaining);
        let skipped = self.input.advance_by(want);
        self.remaining = if skipped < want {
            0
        } else {
            self.remaining - skipped
        };
        skipped
    }
}

impl<P: DoubleEndedPipe + ExactSizePipe> DoubleEndedPipe for TakeN<P> {
    fn next_back(&mut self) -> IterValue<P::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Trim the tail beyond the window before reading from the back.
        let excess = self.input.len().saturating_sub(self.remaining);
        for _ in 0..excess {
            self.input.next_back()?;
        }
        let item = self.input.next_back();
        match item {
            Some(_) => self.remaining -= 1,
            None => self.remaining = 0,
        }
        item
    }
}

impl<P: ExactSizePipe> ExactSizePipe for TakeN<P> {
    fn len(&self) -> usize {
        self.input.len().min(self.remaining)
    }
}

/// Yield elements while `pred` holds; the first failure ends the stage.
///
/// The failing element is consumed from upstream and discarded.
#[derive(Clone)]
pub struct TakeWhile<P, F> {
    input: P,
    pred: F,
    done: bool,
}

impl<P, F> TakeWhile<P, F> {
    pub fn new(input: P, pred: F) -> Self {
        Self {
            input,
            pred,
            done: false,
        }
    }
}

impl<P, F> Pipe for TakeWhile<P, F>
where
    P: Pipe,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        if self.done {
            return None;
        }
        match self.input.next() {
            Some(item) if (self.pred)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.input.size_hint().unbounded_below()
    }
}
