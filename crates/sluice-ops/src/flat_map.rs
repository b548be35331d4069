//! One-to-many stages. Each upstream element expands into a sub-sequence
//! that is drained before the next upstream element is pulled.

use sluice_core::pipe::{IntoPipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;
use sluice_sources::generator::{Generator, Step};

/// Size hint for "whatever is left in the current sub-pipe, plus an
/// unknown amount from the rest of upstream".
fn nested_hint<I: Pipe>(front: Option<&I>, upstream: SizeHint) -> SizeHint {
    let front = front.map(Pipe::size_hint).unwrap_or(SizeHint::exact(0));
    if upstream.upper == Some(0) {
        front
    } else {
        SizeHint::new(front.lower, None)
    }
}

/// Map each element to something iterable and concatenate the results.
pub struct FlatMap<P, U: IntoPipe, F> {
    input: P,
    f: F,
    front: Option<U::IntoPipe>,
    done: bool,
}

impl<P, U: IntoPipe, F> FlatMap<P, U, F> {
    pub fn new(input: P, f: F) -> Self
    where
        P: Pipe,
        F: FnMut(P::Item) -> U,
    {
        Self {
            input,
            f,
            front: None,
            done: false,
        }
    }
}

impl<P, U, F> Pipe for FlatMap<P, U, F>
where
    P: Pipe,
    U: IntoPipe,
    F: FnMut(P::Item) -> U,
{
    type Item = U::Item;

    fn next(&mut self) -> IterValue<U::Item> {
        loop {
            if let Some(front) = self.front.as_mut() {
                if let Some(item) = front.next() {
                    return Some(item);
                }
                self.front = None;
            }
            if self.done {
                return None;
            }
            match self.input.next() {
                Some(outer) => self.front = Some((self.f)(outer).into_pipe()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        nested_hint(self.front.as_ref(), self.input.size_hint())
    }
}

/// Concatenate the sub-sequences an upstream of iterables produces.
pub struct Flatten<P>
where
    P: Pipe,
    P::Item: IntoPipe,
{
    input: P,
    front: Option<<P::Item as IntoPipe>::IntoPipe>,
    done: bool,
}

impl<P> Flatten<P>
where
    P: Pipe,
    P::Item: IntoPipe,
{
    pub fn new(input: P) -> Self {
        Self {
            input,
            front: None,
            done: false,
        }
    }
}

impl<P> Pipe for Flatten<P>
where
    P: Pipe,
    P::Item: IntoPipe,
{
    type Item = <P::Item as IntoPipe>::Item;

    fn next(&mut self) -> IterValue<Self::Item> {
        loop {
            if let Some(front) = self.front.as_mut() {
                if let Some(item) = front.next() {
                    return Some(item);
                }
                self.front = None;
            }
            if self.done {
                return None;
            }
            match self.input.next() {
                Some(inner) => self.front = Some(inner.into_pipe()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        nested_hint(self.front.as_ref(), self.input.size_hint())
    }
}

/// Run a generator per upstream element and yield everything it produces.
///
/// A fault ends the whole stage: the `Err` is yielded once and nothing is
/// pulled from upstream afterwards.
pub struct GenerateFrom<P, F, G> {
    input: P,
    f: F,
    current: Option<G>,
    done: bool,
}

impl<P, F, G> GenerateFrom<P, F, G> {
    pub fn new(input: P, f: F) -> Self {
        Self {
            input,
            f,
            current: None,
            done: false,
        }
    }
}

impl<P, F, G> Pipe for GenerateFrom<P, F, G>
where
    P: Pipe,
    F: FnMut(P::Item) -> G,
    G: Generator,
{
    type Item = Result<G::Yield, G::Error>;

    fn next(&mut self) -> IterValue<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(gen) = self.current.as_mut() {
                match gen.resume() {
                    Step::Yield(y) => return Some(Ok(y)),
                    Step::Done => self.current = None,
                    Step::Fault(e) => {
                        self.current = None;
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }
            match self.input.next() {
                Some(item) => self.current = Some((self.f)(item)),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        SizeHint::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::source::from_iter;
    use sluice_sources::generator::gen_fn;

    fn drain<P: Pipe>(mut p: P) -> Vec<P::Item> {
        let mut out = Vec::new();
        while let Some(x) = p.next() {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_flat_map_skips_empty_subsequences() {
        let p = FlatMap::new(from_iter([0usize, 2, 0, 1]), |n: usize| vec![n; n]);
        assert_eq!(drain(p), vec![2, 2, 1]);
    }

    #[test]
    fn test_flat_map_hint_tracks_front() {
        let mut p = FlatMap::new(from_iter([3usize]), |n: usize| vec![n; n]);
        assert_eq!(p.size_hint(), SizeHint::new(0, None));
        p.next();
        assert_eq!(p.size_hint(), SizeHint::exact(2));
    }

    #[test]
    fn test_flatten_options() {
        let p = Flatten::new(from_iter([Some(1), None, Some(3)]));
        assert_eq!(drain(p), vec![1, 3]);
    }

    #[test]
    fn test_generate_from_expands_and_stops_on_fault() {
        let p = GenerateFrom::new(from_iter([2u32, 0, 9, 1]), |n: u32| {
            let mut i = 0;
            gen_fn(move || {
                if n == 9 {
                    return Step::Fault("nine");
                }
                i += 1;
                if i > n {
                    Step::Done
                } else {
                    Step::Yield(n * 10 + i)
                }
            })
        });
        assert_eq!(drain(p), vec![Ok(21), Ok(22), Err("nine")]);
    }
}
