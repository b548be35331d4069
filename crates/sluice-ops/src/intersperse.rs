//! Separators between consecutive elements.
//!
//! Separators are pulled from a second pipe, one per gap. The stage keeps
//! one upstream element of lookahead so no separator is emitted after the
//! last element. If the separator pipe runs dry first, the stage ends.

use sluice_core::pipe::{ExactSizePipe, IterValue, Pipe};
use sluice_core::size_hint::SizeHint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Start,
    Item,
    Separator,
    Done,
}

#[derive(Debug, Clone)]
pub struct Intersperse<P: Pipe, S> {
    input: P,
    separators: S,
    lookahead: Option<P::Item>,
    turn: Turn,
}

impl<P, S> Intersperse<P, S>
where
    P: Pipe,
    S: Pipe<Item = P::Item>,
{
    pub fn new(input: P, separators: S) -> Self {
        Self {
            input,
            separators,
            lookahead: None,
            turn: Turn::Start,
        }
    }

    /// Upstream elements still to come, counting the lookahead.
    fn pending_items(&self) -> SizeHint {
        match self.turn {
            Turn::Start => self.input.size_hint(),
            Turn::Done => SizeHint::exact(0),
            _ => {
                let buffered = usize::from(self.lookahead.is_some());
                SizeHint::exact(buffered).add(self.input.size_hint())
            }
        }
    }
}

/// Output size for `items` elements interleaved with up to `seps`
/// separators, when the next output is an element.
fn interleaved(items: usize, seps: usize) -> usize {
    if items == 0 {
        return 0;
    }
    let gaps = (items - 1).min(seps);
    gaps.saturating_add(gaps).saturating_add(1)
}

impl<P, S> Pipe for Intersperse<P, S>
where
    P: Pipe,
    S: Pipe<Item = P::Item>,
{
    type Item = P::Item;

    fn next(&mut self) -> IterValue<P::Item> {
        match self.turn {
            Turn::Done => None,
            Turn::Start | Turn::Item => {
                let item = match self.turn {
                    Turn::Start => self.input.next(),
                    _ => self.lookahead.take(),
                };
                let Some(item) = item else {
                    self.turn = Turn::Done;
                    return None;
                };
                self.lookahead = self.input.next();
                self.turn = if self.lookahead.is_some() {
                    Turn::Separator
                } else {
                    Turn::Done
                };
                Some(item)
            }
            Turn::Separator => match self.separators.next() {
                Some(sep) => {
                    self.turn = Turn::Item;
                    Some(sep)
                }
                None => {
                    self.turn = Turn::Done;
                    self.lookahead = None;
                    None
                }
            },
        }
    }

    fn size_hint(&self) -> SizeHint {
        let items = self.pending_items();
        let seps = self.separators.size_hint();
        // Owing a separator, every remaining element needs one in front.
        let owed = self.turn == Turn::Separator;
        let count = |items: usize, seps: usize| {
            if owed {
                let pairs = items.min(seps);
                pairs.saturating_add(pairs)
            } else {
                interleaved(items, seps)
            }
        };
        SizeHint::new(
            count(items.lower, seps.lower),
            items
                .upper
                .map(|u| count(u, seps.upper.unwrap_or(usize::MAX))),
        )
    }
}

impl<P, S> ExactSizePipe for Intersperse<P, S>
where
    P: ExactSizePipe,
    S: ExactSizePipe<Item = P::Item>,
{
}
