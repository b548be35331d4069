//! Closure-backed source.

use std::fmt;

use sluice_core::pipe::{IterValue, Pipe};

/// Pulls from a `FnMut() -> Option<T>` until it first returns `None`.
///
/// The closure is not called again after that, even if it would produce
/// more values.
pub struct FromFn<F> {
    f: F,
    done: bool,
}

pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f, done: false }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("done", &self.done).finish()
    }
}

impl<T, F> Pipe for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> IterValue<T> {
        if self.done {
            return None;
        }
        let item = (self.f)();
        self.done = item.is_none();
        item
    }
}
