//! Error types for pipeline stages.
//!
//! The library raises exactly one error of its own,
//! [`PipeError::EmptyReduction`]. Failures of user-supplied functions are
//! never wrapped: panics unwind through the pipeline untouched, and the
//! fallible combinators (`try_map`, `try_filter`) return the caller's own
//! error type.

use thiserror::Error;

/// Result type alias using [`PipeError`].
pub type Result<T> = std::result::Result<T, PipeError>;

/// Errors raised by the combinators themselves.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeError {
    /// `reduce_first` was applied to a sequence with no elements.
    #[error("cannot reduce an empty sequence without an initial value")]
    EmptyReduction,
}
