#![forbid(unsafe_code)]
//! sluice-sources: pipes that produce values instead of reading a container.
//!
//! - `range`: arithmetic sequences with an exclusive end.
//! - `repeat`: one value forever or `n` times, or closure results forever.
//! - `once`: the empty pipe and the single-value pipe.
//! - `from_fn`: pull from a closure.
//! - `generator`: resumable producers bridged into the pull protocol.

pub mod from_fn;
pub mod generator;
pub mod once;
pub mod range;
pub mod repeat;

pub use from_fn::{from_fn, FromFn};
pub use generator::{from_generator, gen_fn, FromGenerator, GenFn, Generator, Step};
pub use once::{empty, once, Empty, Once};
pub use range::{range, Range, RangeValue};
pub use repeat::{repeat, repeat_n, repeat_with, Repeat, RepeatN, RepeatWith};
