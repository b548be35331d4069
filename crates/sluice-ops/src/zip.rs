//! Positional pairing. Ends with the shortest input.

use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

fn min_hint(a: SizeHint, b: SizeHint) -> SizeHint {
    SizeHint::new(a.lower.min(b.lower), SizeHint::min_upper(a.upper, b.upper))
}

/// `(a[i], b[i])` pairs.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A: Pipe, B: Pipe> Pipe for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> IterValue<Self::Item> {
        if self.done {
            return None;
        }
        let pair = self.a.next().and_then(|x| Some((x, self.b.next()?)));
        self.done = pair.is_none();
        pair
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        min_hint(self.a.size_hint(), self.b.size_hint())
    }
}

impl<A: ExactSizePipe, B: ExactSizePipe> ExactSizePipe for Zip<A, B> {
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        self.a.len().min(self.b.len())
    }
}

/// One `Vec` per position holding the element of every input.
///
/// A round stops pulling at the first exhausted input. With no inputs at
/// all the result is empty.
#[derive(Debug, Clone)]
pub struct ZipAll<P> {
    inputs: Vec<P>,
    done: bool,
}

impl<P> ZipAll<P> {
    pub fn new(inputs: Vec<P>) -> Self {
        let done = inputs.is_empty();
        Self { inputs, done }
    }
}

impl<P: Pipe> Pipe for ZipAll<P> {
    type Item = Vec<P::Item>;

    fn next(&mut self) -> IterValue<Vec<P::Item>> {
        if self.done {
            return None;
        }
        let mut row = Vec::with_capacity(self.inputs.len());
        for input in &mut self.inputs {
            match input.next() {
                Some(item) => row.push(item),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
        Some(row)
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.inputs
            .iter()
            .map(Pipe::size_hint)
            .reduce(min_hint)
            .unwrap_or(SizeHint::exact(0))
    }
}

impl<P: ExactSizePipe> ExactSizePipe for ZipAll<P> {}
