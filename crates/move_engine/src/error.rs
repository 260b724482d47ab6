//! Error types for the move engine
//!
//! Two families of failure exist:
//!
//! - [`EngineError`] - input validation failures, reported to the caller
//! - [`SearchAbort`] - internal control flow of the search, always recovered
//!   by the iterative deepening driver and never visible outside the crate

use thiserror::Error;

/// Errors reported to callers of the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Position description could not be parsed into a legal setup
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// A depth or time parameter was not a usable positive value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Reasons a search stops before finishing its depth
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchAbort {
    /// The wall-clock budget ran out
    #[error("Search time budget exceeded")]
    TimeExceeded,
}
