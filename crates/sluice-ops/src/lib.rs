#![forbid(unsafe_code)]
//! sluice-ops: the adaptor catalog.
//!
//! Every stage wraps its upstream pipe (or a `Vec` of them for the N-ary
//! combinators), pulls on demand and derives its size hint from upstream's.
//! Stages that must see the whole input before producing anything
//! (`Sorter`, `GroupBy`, `ReverseBuffered`) do so on their first pull and
//! report it through `trace`.
//!
//! Constructors that take a count or stride validate it and return
//! `sluice_core::Result`.

pub mod trace;

pub mod filter;
pub mod flat_map;
pub mod fuse;
pub mod map;

pub mod alternate;
pub mod chain;
pub mod zip;

pub mod chunked;
pub mod flag_last;
pub mod intersperse;
pub mod skip;
pub mod step_by;
pub mod take;

pub mod group_by;
pub mod reverse;
pub mod sort;
pub mod unique;

pub use alternate::{Alternate, AlternateAll};
pub use chain::{Chain, ChainAll};
pub use chunked::{Chunked, ChunkedExact};
pub use filter::{Filter, FilterMap};
pub use flag_last::FlagLast;
pub use flat_map::{FlatMap, Flatten, GenerateFrom};
pub use fuse::Fuse;
pub use group_by::GroupBy;
pub use intersperse::Intersperse;
pub use map::{Cast, Cloned, Copied, Indexed, InplaceModifier, Map};
pub use reverse::{Reverse, ReverseBuffered};
pub use skip::{SkipN, SkipWhile};
pub use sort::{ByKey, ByOrder, Compare, SortOrder, Sorter};
pub use step_by::StepBy;
pub use take::{TakeN, TakeWhile};
pub use unique::Unique;
pub use zip::{Zip, ZipAll};
