use thiserror::Error;

/// Canonical result for sluice.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `chunked` / `chunked_exact` need at least one element per chunk.
    #[error("invalid chunk size {size}: chunks must hold at least one element")]
    InvalidChunkSize { size: usize },

    /// A zero stride can never advance (`step_by`, `chunked_exact`, `range`).
    #[error("invalid step for {op}: step must be non-zero")]
    InvalidStep { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
