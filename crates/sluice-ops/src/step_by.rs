//! Every n-th element, starting with the first.

use sluice_core::error::{Error, Result};
use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

#[derive(Debug, Clone)]
pub struct StepBy<P> {
    input: P,
    step: usize,
    first_taken: bool,
    done: bool,
}

impl<P> StepBy<P> {
    pub fn new(input: P, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidStep { op: "step_by" });
        }
        Ok(Self {
            input,
            step,
            first_taken: false,
            done: false,
        })
    }

    fn remaining_for(&self, available: usize) -> usize {
        if self.first_taken {
            available / self.step
        } else if available == 0 {
            0
        } else {
            1 + (available - 1) / self.step
        }
    }
}

impl<P: Pipe> Pipe for StepBy<P> {
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        if self.done {
            return None;
        }
        if self.first_taken {
            let gap = self.step - 1;
            if self.input.advance_by(gap) < gap {
                self.done = true;
                return None;
            }
        }
        let Some(item) = self.input.next() else {
            self.done = true;
            return None;
        };
        self.first_taken = true;
        Some(item)
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.input.size_hint().map_bounds(|b| self.remaining_for(b))
    }
}

impl<P: ExactSizePipe> ExactSizePipe for StepBy<P> {
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        self.remaining_for(self.input.len())
    }
}
