//! Bridge from resumable producers into the pull protocol.
//!
//! A [`Generator`] is an explicit state machine: its saved locals live in
//! `self` and every [`Generator::resume`] call runs it up to the next value.
//! [`FromGenerator`] resumes it once per `next()` on the caller's thread.
//!
//! Faults are fail-fast: the first `Step::Fault(e)` is handed downstream as
//! `Err(e)` and the bridge is exhausted from then on. The generator is
//! dropped as soon as it finishes or faults, and otherwise when the bridge
//! is dropped, so guards held in its state are released either way.

use std::fmt;

use sluice_core::pipe::{IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

/// Outcome of one resumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<Y, E> {
    Yield(Y),
    Done,
    Fault(E),
}

impl<Y, E> From<Option<Y>> for Step<Y, E> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yield(y),
            None => Step::Done,
        }
    }
}

impl<Y, E> From<Result<Option<Y>, E>> for Step<Y, E> {
    fn from(value: Result<Option<Y>, E>) -> Self {
        match value {
            Ok(v) => v.into(),
            Err(e) => Step::Fault(e),
        }
    }
}

/// A resumable producer of values.
pub trait Generator {
    type Yield;
    type Error;

    /// Run until the next value, completion, or a fault.
    ///
    /// Not called again after returning `Done` or `Fault`.
    fn resume(&mut self) -> Step<Self::Yield, Self::Error>;

    /// Bounds on how many values are still to come.
    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Yield = G::Yield;
    type Error = G::Error;

    fn resume(&mut self) -> Step<Self::Yield, Self::Error> {
        (**self).resume()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

/// Generator backed by a closure; captured variables are its saved state.
pub struct GenFn<F> {
    f: F,
}

pub fn gen_fn<Y, E, F>(f: F) -> GenFn<F>
where
    F: FnMut() -> Step<Y, E>,
{
    GenFn { f }
}

impl<F> fmt::Debug for GenFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GenFn")
    }
}

impl<Y, E, F> Generator for GenFn<F>
where
    F: FnMut() -> Step<Y, E>,
{
    type Yield = Y;
    type Error = E;

    fn resume(&mut self) -> Step<Y, E> {
        (self.f)()
    }
}

/// Pipe over a generator's values, yielding `Ok(value)` or a single
/// `Err(fault)`.
pub struct FromGenerator<G> {
    gen: Option<G>,
}

pub fn from_generator<G: Generator>(gen: G) -> FromGenerator<G> {
    FromGenerator { gen: Some(gen) }
}

impl<G> FromGenerator<G> {
    /// The generator has completed, faulted, or been abandoned.
    pub fn is_finished(&self) -> bool {
        self.gen.is_none()
    }
}

impl<G> fmt::Debug for FromGenerator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromGenerator")
            .field("finished", &self.is_finished())
            .finish()
    }
}

impl<G: Generator> Pipe for FromGenerator<G> {
    type Item = Result<G::Yield, G::Error>;

    fn next(&mut self) -> IterValue<Self::Item> {
        let gen = self.gen.as_mut()?;
        match gen.resume() {
            Step::Yield(y) => Some(Ok(y)),
            Step::Done => {
                self.gen = None;
                None
            }
            Step::Fault(e) => {
                self.gen = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "sluice::generator", "generator fault; bridge exhausted");
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.gen {
            // A fault may cut the run short, so only the upper bound (plus
            // one slot for the error) is kept.
            Some(gen) => {
                let hint = gen.size_hint();
                SizeHint::new(0, hint.upper.and_then(|u| u.checked_add(1)))
            }
            None => SizeHint::exact(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts 0..n and faults when it reaches `fail_at`.
    struct Counter {
        next: u32,
        end: u32,
        fail_at: Option<u32>,
    }

    impl Generator for Counter {
        type Yield = u32;
        type Error = String;

        fn resume(&mut self) -> Step<u32, String> {
            if Some(self.next) == self.fail_at {
                return Step::Fault(format!("failed at {}", self.next));
            }
            if self.next >= self.end {
                return Step::Done;
            }
            self.next += 1;
            Step::Yield(self.next - 1)
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::exact((self.end - self.next) as usize)
        }
    }

    #[test]
    fn test_yields_then_done() {
        let mut pipe = from_generator(Counter { next: 0, end: 3, fail_at: None });
        assert_eq!(pipe.size_hint(), SizeHint::new(0, Some(4)));
        assert_eq!(pipe.next(), Some(Ok(0)));
        assert_eq!(pipe.next(), Some(Ok(1)));
        assert_eq!(pipe.next(), Some(Ok(2)));
        assert_eq!(pipe.next(), None);
        assert!(pipe.is_finished());
        assert_eq!(pipe.next(), None);
    }

    #[test]
    fn test_fault_is_fail_fast() {
        let mut pipe = from_generator(Counter { next: 0, end: 10, fail_at: Some(2) });
        assert_eq!(pipe.next(), Some(Ok(0)));
        assert_eq!(pipe.next(), Some(Ok(1)));
        assert_eq!(pipe.next(), Some(Err("failed at 2".to_string())));
        assert_eq!(pipe.next(), None);
        assert_eq!(pipe.size_hint(), SizeHint::exact(0));
    }

    struct Guard(Rc<Cell<bool>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_abandoned_generator_releases_guard() {
        let released = Rc::new(Cell::new(false));
        let guard = Guard(released.clone());
        let mut n = 0;
        let mut pipe = from_generator(gen_fn(move || {
            let _held = &guard;
            n += 1;
            Step::<u32, ()>::Yield(n)
        }));
        assert_eq!(pipe.next(), Some(Ok(1)));
        assert!(!released.get());
        drop(pipe);
        assert!(released.get());
    }

    #[test]
    fn test_step_from_option_and_result() {
        assert_eq!(Step::<_, ()>::from(Some(1)), Step::Yield(1));
        assert_eq!(Step::<u8, ()>::from(None), Step::Done);
        assert_eq!(Step::<u8, &str>::from(Err("x")), Step::Fault("x"));
    }
}
