//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use sluice::{Pipe, SizeHint};

/// Drain a pipe, checking at every step that the size hint brackets the
/// number of elements that actually remained.
pub fn drain_checking_hints<P: Pipe>(mut pipe: P) -> Vec<P::Item> {
    let mut hints: Vec<SizeHint> = Vec::new();
    let mut out = Vec::new();
    loop {
        hints.push(pipe.size_hint());
        match pipe.next() {
            Some(item) => out.push(item),
            None => break,
        }
    }
    let total = out.len();
    for (pulled, hint) in hints.iter().enumerate() {
        let remaining = total - pulled;
        assert!(
            hint.lower <= remaining,
            "lower bound {} exceeds remaining {} after {} pulls",
            hint.lower,
            remaining,
            pulled
        );
        if let Some(upper) = hint.upper {
            assert!(
                remaining <= upper,
                "remaining {} exceeds upper bound {} after {} pulls",
                remaining,
                upper,
                pulled
            );
        }
    }
    out
}

/// After exhaustion, further pulls keep returning `None`.
pub fn assert_stays_exhausted<P: Pipe>(pipe: &mut P) {
    while pipe.next().is_some() {}
    for _ in 0..3 {
        assert!(pipe.next().is_none(), "pipe produced an element after None");
    }
}

/// Pipe over `0..len` that counts how often it was pulled.
pub struct CountingPipe {
    next: usize,
    len: usize,
    pulls: Rc<Cell<usize>>,
}

pub fn counting(len: usize) -> (CountingPipe, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let pipe = CountingPipe {
        next: 0,
        len,
        pulls: pulls.clone(),
    };
    (pipe, pulls)
}

impl Pipe for CountingPipe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pulls.set(self.pulls.get() + 1);
        if self.next >= self.len {
            return None;
        }
        self.next += 1;
        Some(self.next - 1)
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.len.saturating_sub(self.next))
    }
}

/// A badly behaved upstream: yields `a`, then `None`, then `b`, then `None`
/// forever. Stages that keep state must not resurrect after the first `None`.
pub struct Flaky {
    step: u8,
}

pub fn flaky() -> Flaky {
    Flaky { step: 0 }
}

impl Pipe for Flaky {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.step = self.step.saturating_add(1);
        match self.step {
            1 => Some(1),
            3 => Some(3),
            _ => None,
        }
    }
}
