//! Convenient re-exports for downstream crates.

pub use crate::config::PipeConfig;
pub use crate::element::{Borrowed, BorrowedMut, Mode, Owned, Ownership, RefElement};
pub use crate::error::{Error, Result};
pub use crate::pipe::{DoubleEndedPipe, ExactSizePipe, IntoPipe, IterValue, Pipe, PipeIter};
pub use crate::size_hint::SizeHint;
pub use crate::source::{from_iter, from_mut, from_owned, from_ref, from_taken, Source};
