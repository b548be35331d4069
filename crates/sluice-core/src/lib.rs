#![forbid(unsafe_code)]
//! sluice-core: the pull protocol and everything a stage needs to speak it.
//!
//! - `pipe`: the `Pipe` trait plus double-ended / exact-size extensions.
//! - `size_hint`: advisory length bounds propagated through a chain.
//! - `element`: ownership categories and source mode markers.
//! - `source`: container sources in mutable-borrow, borrow and owning modes.
//! - `config`: `PipeConfig`, consulted by terminal operations.
//!
//! No operators live here; see `sluice-ops`.

pub mod config;
pub mod element;
pub mod error;
pub mod pipe;
pub mod prelude;
pub mod size_hint;
pub mod source;

pub use error::{Error, Result};
pub use pipe::{DoubleEndedPipe, ExactSizePipe, IntoPipe, IterValue, Pipe, PipeIter};
pub use size_hint::SizeHint;
