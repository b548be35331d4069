//! Tag each element with whether it is the final one.

use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Yields `(item, is_last)`, reading one element ahead of the consumer.
#[derive(Debug, Clone)]
pub struct FlagLast<P: Pipe> {
    input: P,
    lookahead: Option<P::Item>,
    primed: bool,
}

impl<P: Pipe> FlagLast<P> {
    pub fn new(input: P) -> Self {
        Self {
            input,
            lookahead: None,
            primed: false,
        }
    }
}

impl<P: Pipe> Pipe for FlagLast<P> {
    type Item = (P::Item, bool);

    fn next(&mut self) -> IterValue<Self::Item> {
        if !self.primed {
            self.primed = true;
            self.lookahead = self.input.next();
        }
        let item = self.lookahead.take()?;
        self.lookahead = self.input.next();
        Some((item, self.lookahead.is_none()))
    }

    fn size_hint(&self) -> SizeHint {
        let upstream = self.input.size_hint();
        if !self.primed {
            return upstream;
        }
        SizeHint::exact(usize::from(self.lookahead.is_some())).add(upstream)
    }
}

impl<P: ExactSizePipe> ExactSizePipe for FlagLast<P> {
    fn len(&self) -> usize {
        let buffered = usize::from(self.primed && self.lookahead.is_some());
        self.input.len() + buffered
    }
}
