#![forbid(unsafe_code)]
//! sluice: pull-based, statically-typed pipelines over arbitrary containers.
//!
//! A chain starts at a source (`from_ref`, `from_mut`, `from_owned`,
//! `range`, a generator, …), grows one stage per [`PipeExt`] method and is
//! driven by a single terminal operation:
//!
//! ```
//! use sluice::prelude::*;
//!
//! let data = vec![5, 3, 8, 1, 9, 2];
//! let out: Vec<i32> = from_ref(&data)
//!     .filter(|x| **x % 2 == 1)
//!     .map(|x| x * 10)
//!     .sorted()
//!     .collect_into();
//! assert_eq!(out, vec![10, 30, 50, 90]);
//! ```
//!
//! Stages are plain generic structs, so a chain compiles down to nested
//! calls with no dynamic dispatch. Nothing is buffered except by stages
//! whose semantics need the whole input (sorting, grouping, buffered
//! reverse) and the fixed-size buffers of chunking.

pub mod collect;
pub mod ext;
pub mod trace;

pub use collect::CollectTarget;
pub use ext::{AsF64, PipeExt};

pub use sluice_core::config::PipeConfig;
pub use sluice_core::element::{Borrowed, BorrowedMut, Mode, Owned, Ownership, RefElement};
pub use sluice_core::source::{from_iter, from_mut, from_owned, from_ref, from_taken, Source};
pub use sluice_core::{
    DoubleEndedPipe, Error, ExactSizePipe, IntoPipe, IterValue, Pipe, PipeIter, Result, SizeHint,
};
pub use sluice_ops as ops;
pub use sluice_ops::{ByKey, ByOrder, Compare, SortOrder};
pub use sluice_sources::{
    empty, from_fn, from_generator, gen_fn, once, range, repeat, repeat_n, repeat_with,
    FromGenerator, GenFn, Generator, RangeValue, Step,
};

use sluice_ops::{AlternateAll, ChainAll, ZipAll};

/// Concatenate any number of pipes in order.
pub fn chain_all<I>(inputs: I) -> ChainAll<<I::Item as IntoPipe>::IntoPipe>
where
    I: IntoIterator,
    I::Item: IntoPipe,
{
    ChainAll::new(inputs.into_iter().map(IntoPipe::into_pipe).collect())
}

/// Zip any number of pipes into per-position `Vec`s.
pub fn zip_all<I>(inputs: I) -> ZipAll<<I::Item as IntoPipe>::IntoPipe>
where
    I: IntoIterator,
    I::Item: IntoPipe,
{
    ZipAll::new(inputs.into_iter().map(IntoPipe::into_pipe).collect())
}

/// Round-robin over any number of pipes, dropping each as it runs dry.
pub fn alternate_all<I>(inputs: I) -> AlternateAll<<I::Item as IntoPipe>::IntoPipe>
where
    I: IntoIterator,
    I::Item: IntoPipe,
{
    AlternateAll::new(inputs.into_iter().map(IntoPipe::into_pipe).collect())
}

pub mod prelude {
    //! Everything needed to build and drive a chain.
    pub use crate::collect::CollectTarget;
    pub use crate::ext::{AsF64, PipeExt};
    pub use crate::{alternate_all, chain_all, zip_all};
    pub use sluice_core::prelude::*;
    pub use sluice_ops::{ByKey, ByOrder, Compare, SortOrder};
    pub use sluice_sources::{
        empty, from_fn, from_generator, gen_fn, once, range, repeat, repeat_n, repeat_with,
        Generator, Step,
    };
}
