//! Concatenation of two or more pipes with the same item type.

use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// All of `a`, then all of `b`.
///
/// An input is dropped as soon as it runs dry, so neither is pulled again
/// after returning `None`.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

fn hint_of<P: Pipe>(p: &Option<P>) -> SizeHint {
    p.as_ref().map_or(SizeHint::exact(0), Pipe::size_hint)
}

impl<A, B> Pipe for Chain<A, B>
where
    A: Pipe,
    B: Pipe<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> IterValue<A::Item> {
        if let Some(a) = self.a.as_mut() {
            match a.next() {
                None => self.a = None,
                item => return item,
            }
        }
        let item = self.b.as_mut()?.next();
        if item.is_none() {
            self.b = None;
        }
        item
    }

    fn size_hint(&self) -> SizeHint {
        hint_of(&self.a).add(hint_of(&self.b))
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        if let Some(a) = self.a.as_mut() {
            skipped = a.advance_by(n);
            if skipped == n {
                return n;
            }
            self.a = None;
        }
        if let Some(b) = self.b.as_mut() {
            skipped += b.advance_by(n - skipped);
        }
        skipped
    }
}

impl<A, B> DoubleEndedPipe for Chain<A, B>
where
    A: DoubleEndedPipe,
    B: DoubleEndedPipe<Item = A::Item>,
{
    fn next_back(&mut self) -> IterValue<A::Item> {
        if let Some(b) = self.b.as_mut() {
            match b.next_back() {
                None => self.b = None,
                item => return item,
            }
        }
        let item = self.a.as_mut()?.next_back();
        if item.is_none() {
            self.a = None;
        }
        item
    }
}

impl<A, B> ExactSizePipe for Chain<A, B>
where
    A: ExactSizePipe,
    B: ExactSizePipe<Item = A::Item>,
{
    fn len(&self) -> usize {
        let a = self.a.as_ref().map_or(0, ExactSizePipe::len);
        let b = self.b.as_ref().map_or(0, ExactSizePipe::len);
        a + b
    }
}

/// Every input in order; `inputs[i]` is drained before `inputs[i + 1]`.
#[derive(Debug, Clone)]
pub struct ChainAll<P> {
    inputs: Vec<P>,
    current: usize,
}

impl<P> ChainAll<P> {
    pub fn new(inputs: Vec<P>) -> Self {
        Self { inputs, current: 0 }
    }
}

impl<P: Pipe> Pipe for ChainAll<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        while let Some(input) = self.inputs.get_mut(self.current) {
            if let Some(item) = input.next() {
                return Some(item);
            }
            self.current += 1;
        }
        None
    }

    fn size_hint(&self) -> SizeHint {
        self.inputs[self.current.min(self.inputs.len())..]
            .iter()
            .fold(SizeHint::exact(0), |acc, p| acc.add(p.size_hint()))
    }
}

impl<P: ExactSizePipe> ExactSizePipe for ChainAll<P> {}
