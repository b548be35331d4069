//! One-in, one-out stages: every upstream element produces exactly one
//! output, so size hints and exact lengths pass through untouched.

use std::fmt;
use std::marker::PhantomData;

use sluice_core::element::RefElement;
use sluice_core::pipe::{DoubleEndedPipe, ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Forwards the length-related parts of `Pipe` plus the double-ended and
/// exact-size extensions for a one-to-one stage. `$apply` turns an upstream
/// item into an output item given `self`.
macro_rules! one_to_one {
    (
        impl[$($gen:tt)*] $ty:ty where [$($bound:tt)*] ;
        type Item = $item:ty;
        fn apply(&mut $self:ident, $x:ident) $body:block
    ) => {
        impl<$($gen)*> Pipe for $ty where $($bound)* {
            type Item = $item;

            #[inline]
            fn next(&mut $self) -> IterValue<$item> {
                let $x = $self.input.next()?;
                Some($body)
            }

            fn size_hint(&self) -> SizeHint {
                self.input.size_hint()
            }

            fn advance_by(&mut self, n: usize) -> usize {
                self.input.advance_by(n)
            }
        }

        impl<$($gen)*> DoubleEndedPipe for $ty where P: DoubleEndedPipe, $($bound)* {
            fn next_back(&mut $self) -> IterValue<$item> {
                let $x = $self.input.next_back()?;
                Some($body)
            }
        }

        impl<$($gen)*> ExactSizePipe for $ty where P: ExactSizePipe, $($bound)* {
            fn len(&self) -> usize {
                self.input.len()
            }
        }
    };
}

/// Apply a transform to every element.
#[derive(Clone)]
pub struct Map<P, F> {
    input: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(input: P, f: F) -> Self {
        Self { input, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("input", &self.input).finish()
    }
}

one_to_one! {
    impl[P, F, U] Map<P, F> where [P: Pipe, F: FnMut(P::Item) -> U];
    type Item = U;
    fn apply(&mut self, x) { (self.f)(x) }
}

/// Convert each element with `Into`.
pub struct Cast<P, U> {
    input: P,
    _target: PhantomData<fn() -> U>,
}

impl<P, U> Cast<P, U> {
    pub fn new(input: P) -> Self {
        Self {
            input,
            _target: PhantomData,
        }
    }
}

impl<P: Clone, U> Clone for Cast<P, U> {
    fn clone(&self) -> Self {
        Self::new(self.input.clone())
    }
}

impl<P: fmt::Debug, U> fmt::Debug for Cast<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cast").field("input", &self.input).finish()
    }
}

one_to_one! {
    impl[P, U] Cast<P, U> where [P: Pipe, P::Item: Into<U>];
    type Item = U;
    fn apply(&mut self, x) { x.into() }
}

/// Mutate each element in place, then pass it on.
///
/// Over a mutable-borrow source the closure receives `&mut &mut T`, and
/// writes land in the source container.
#[derive(Clone)]
pub struct InplaceModifier<P, F> {
    input: P,
    f: F,
}

impl<P, F> InplaceModifier<P, F> {
    pub fn new(input: P, f: F) -> Self {
        Self { input, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for InplaceModifier<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InplaceModifier")
            .field("input", &self.input)
            .finish()
    }
}

one_to_one! {
    impl[P, F] InplaceModifier<P, F> where [P: Pipe, F: FnMut(&mut P::Item)];
    type Item = P::Item;
    fn apply(&mut self, x) {
        let mut x = x;
        (self.f)(&mut x);
        x
    }
}

/// Copy reference elements out into owned values.
#[derive(Debug, Clone)]
pub struct Cloned<P> {
    input: P,
}

/// `copied()` is `cloned()` restricted to `Copy` targets.
pub type Copied<P> = Cloned<P>;

impl<P> Cloned<P> {
    pub fn new(input: P) -> Self {
        Self { input }
    }
}

one_to_one! {
    impl[P] Cloned<P> where [P: Pipe, P::Item: RefElement];
    type Item = <P::Item as RefElement>::Target;
    fn apply(&mut self, x) { x.to_owned_item() }
}

/// Pair each element with its 0-based position.
#[derive(Debug, Clone)]
pub struct Indexed<P> {
    input: P,
    idx: usize,
    done: bool,
}

impl<P> Indexed<P> {
    pub fn new(input: P) -> Self {
        Self {
            input,
            idx: 0,
            done: false,
        }
    }
}

impl<P: Pipe> Pipe for Indexed<P> {
    type Item = (usize, P::Item);

    fn next(&mut self) -> IterValue<Self::Item> {
        if self.done {
            return None;
        }
        let Some(item) = self.input.next() else {
            self.done = true;
            return None;
        };
        let idx = self.idx;
        self.idx += 1;
        Some((idx, item))
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.input.size_hint()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        if self.done {
            return 0;
        }
        let skipped = self.input.advance_by(n);
        self.idx += skipped;
        self.done = skipped < n;
        skipped
    }
}

impl<P: ExactSizePipe> ExactSizePipe for Indexed<P> {
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        self.input.len()
    }
}
