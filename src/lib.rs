//! # pipes
//!
//! Left-to-right pipeline combinators over any ordered container.
//!
//! ## Overview
//!
//! Instead of nesting calls like `reduce(map(sort(filter(xs))))`, a pipeline
//! reads in the order the data flows:
//!
//! - **Container Capability Contract**: [`Sequence`](sequence::Sequence) — size,
//!   traversal, end-insertion, construction with a capacity hint
//! - **Shape Inference**: [`Rebind`](sequence::Rebind) — "the same container
//!   shape, holding another element type", resolved at compile time
//! - **Pipe Operator**: [`Operation`](pipe::Operation), [`Pipe`](pipe::Pipe),
//!   [`Pipeline`](pipe::Pipeline) and the [`pipe!`] macro
//! - **Combinators**: `map`, `flatmap`, `collect`, `filter`, `sort`, `reduce`,
//!   `reduce_first`, `fold`, `for_each` and the `range` source
//!
//! Every stage is eager: it fully materializes its output before the next
//! stage runs.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit a `trace` event per stage (enabled by default)
//! - `smallvec`: use `smallvec::SmallVec` as a pipeline container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipes::prelude::*;
//!
//! let total = vec![1, 2, 3, 4, 5, 6]
//!     .pipe(filter(|value: &i32| value % 2 == 0))
//!     .pipe(map(|value: i32| value * 10))
//!     .pipe(reduce(plus));
//!
//! assert_eq!(total, 120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

pub mod combinator;
pub mod error;
pub mod pipe;
pub mod sequence;

pub use error::{PipeError, Result};

/// Prelude module for convenient imports.
///
/// Re-exports the traits, the combinator factories, the error type and the
/// `pipe!`/`chain!` macros.
///
/// # Usage
///
/// ```rust
/// use pipes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{chain, pipe};
    pub use crate::combinator::*;
    pub use crate::error::PipeError;
    pub use crate::pipe::*;
    pub use crate::sequence::*;
}
