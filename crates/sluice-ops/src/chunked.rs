//! Grouping consecutive elements into `Vec` chunks.
//!
//! [`Chunked`] tiles the input and keeps a short final chunk.
//! [`ChunkedExact`] emits windows of exactly `size` elements starting every
//! `step` elements; `step < size` overlaps windows, `step > size` leaves
//! gaps, and a window that cannot be completed is dropped.

use std::fmt;
use std::mem;

use sluice_core::error::{Error, Result};
use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

#[derive(Debug, Clone)]
pub struct Chunked<P> {
    input: P,
    size: usize,
    done: bool,
}

impl<P> Chunked<P> {
    pub fn new(input: P, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize { size });
        }
        Ok(Self {
            input,
            size,
            done: false,
        })
    }
}

impl<P: Pipe> Pipe for Chunked<P> {
    type Item = Vec<P::Item>;

    fn next(&mut self) -> IterValue<Vec<P::Item>> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.input.next() {
                Some(item) => chunk.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        let size = self.size;
        self.input.size_hint().map_bounds(|b| b.div_ceil(size))
    }
}

impl<P: ExactSizePipe> ExactSizePipe for Chunked<P> {
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        self.input.len().div_ceil(self.size)
    }
}

/// Fixed-size windows at offsets `0, step, 2*step, …`.
pub struct ChunkedExact<P: Pipe> {
    input: P,
    size: usize,
    step: usize,
    /// The last emitted window, or empty before the first.
    window: Vec<P::Item>,
    started: bool,
    done: bool,
}

impl<P: Pipe + fmt::Debug> fmt::Debug for ChunkedExact<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedExact")
            .field("input", &self.input)
            .field("size", &self.size)
            .field("step", &self.step)
            .field("buffered", &self.window.len())
            .field("done", &self.done)
            .finish()
    }
}

impl<P: Pipe> ChunkedExact<P> {
    pub fn new(input: P, size: usize, step: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize { size });
        }
        if step == 0 {
            return Err(Error::InvalidStep {
                op: "chunked_exact",
            });
        }
        Ok(Self {
            input,
            size,
            step,
            window: Vec::with_capacity(size),
            started: false,
            done: false,
        })
    }

    /// Windows left when `available` elements remain upstream.
    fn windows_for(&self, available: usize) -> usize {
        // Elements the next window can draw from, counted from its start.
        let span = if !self.started {
            available
        } else if self.step < self.size {
            available.saturating_add(self.size - self.step)
        } else {
            available.saturating_sub(self.step - self.size)
        };
        if span < self.size {
            0
        } else {
            (span - self.size) / self.step + 1
        }
    }

    fn fill(&mut self) -> bool {
        while self.window.len() < self.size {
            match self.input.next() {
                Some(item) => self.window.push(item),
                None => return false,
            }
        }
        true
    }
}

impl<P> Pipe for ChunkedExact<P>
where
    P: Pipe,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn next(&mut self) -> IterValue<Vec<P::Item>> {
        if self.done {
            return None;
        }
        if self.started {
            if self.step < self.size {
                self.window.drain(..self.step);
            } else {
                self.window.clear();
                let gap = self.step - self.size;
                if self.input.advance_by(gap) < gap {
                    self.done = true;
                    return None;
                }
            }
        }
        self.started = true;
        if !self.fill() {
            self.done = true;
            self.window.clear();
            return None;
        }
        if self.step < self.size {
            // Overlap: the tail stays buffered for the next window.
            Some(self.window.clone())
        } else {
            Some(mem::replace(&mut self.window, Vec::with_capacity(self.size)))
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::exact(0);
        }
        self.input.size_hint().map_bounds(|b| self.windows_for(b))
    }
}

impl<P> ExactSizePipe for ChunkedExact<P>
where
    P: ExactSizePipe,
    P::Item: Clone,
{
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        self.windows_for(self.input.len())
    }
}
