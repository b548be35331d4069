//! Round-robin interleaving. Inputs that run dry drop out of the rotation;
//! the others keep taking turns until all are exhausted.

use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// `a[0], b[0], a[1], b[1], …`.
#[derive(Debug, Clone)]
pub struct Alternate<A, B> {
    a: Option<A>,
    b: Option<B>,
    b_next: bool,
}

impl<A, B> Alternate<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
            b_next: false,
        }
    }
}

impl<A, B> Alternate<A, B>
where
    A: Pipe,
    B: Pipe<Item = A::Item>,
{
    fn pull_a(&mut self) -> IterValue<A::Item> {
        let item = self.a.as_mut()?.next();
        if item.is_none() {
            self.a = None;
        }
        item
    }

    fn pull_b(&mut self) -> IterValue<A::Item> {
        let item = self.b.as_mut()?.next();
        if item.is_none() {
            self.b = None;
        }
        item
    }
}

impl<A, B> Pipe for Alternate<A, B>
where
    A: Pipe,
    B: Pipe<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> IterValue<A::Item> {
        let item = if self.b_next {
            self.pull_b().or_else(|| self.pull_a())
        } else {
            self.pull_a().or_else(|| self.pull_b())
        };
        // Whoever produced, the other side goes next.
        if item.is_some() {
            self.b_next = !self.b_next;
        }
        item
    }

    fn size_hint(&self) -> SizeHint {
        let a = self.a.as_ref().map_or(SizeHint::exact(0), Pipe::size_hint);
        let b = self.b.as_ref().map_or(SizeHint::exact(0), Pipe::size_hint);
        a.add(b)
    }
}

impl<A, B> ExactSizePipe for Alternate<A, B>
where
    A: ExactSizePipe,
    B: ExactSizePipe<Item = A::Item>,
{
}

/// Round-robin over any number of inputs.
#[derive(Debug, Clone)]
pub struct AlternateAll<P> {
    inputs: Vec<Option<P>>,
    cursor: usize,
    live: usize,
}

impl<P> AlternateAll<P> {
    pub fn new(inputs: Vec<P>) -> Self {
        let live = inputs.len();
        Self {
            inputs: inputs.into_iter().map(Some).collect(),
            cursor: 0,
            live,
        }
    }
}

impl<P: Pipe> Pipe for AlternateAll<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        while self.live > 0 {
            let idx = self.cursor;
            self.cursor = (self.cursor + 1) % self.inputs.len();
            let Some(input) = self.inputs[idx].as_mut() else {
                continue;
            };
            match input.next() {
                Some(item) => return Some(item),
                None => {
                    self.inputs[idx] = None;
                    self.live -= 1;
                }
            }
        }
        None
    }

    fn size_hint(&self) -> SizeHint {
        self.inputs
            .iter()
            .flatten()
            .fold(SizeHint::exact(0), |acc, p| acc.add(p.size_hint()))
    }
}

impl<P: ExactSizePipe> ExactSizePipe for AlternateAll<P> {}
