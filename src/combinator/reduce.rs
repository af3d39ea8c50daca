//! `reduce`, `reduce_first` and `fold`.
//!
//! All three fold left to right:
//!
//! ```text
//! reduce(f)([e0, e1, e2, ...]) = f(f(f(e0, e1), e2), ...)
//! fold(init, f)([e0, e1, ...]) = f(f(init, e0), e1) ...
//! ```
//!
//! They differ on an empty input. [`reduce`] returns the element type's
//! `Default` value, which is right for sums and counts. [`reduce_first`]
//! fails with [`PipeError::EmptyReduction`], for folds where a default would
//! hide a bug (joining strings, merging structures). [`fold`] returns its
//! initial value.
//!
//! None of them reads more elements than the input's `size()` reports.

use std::ops::Add;

use crate::error::PipeError;
use crate::pipe::Operation;
use crate::sequence::Sequence;

/// Adds two values.
///
/// Shorthand for numeric reductions: `reduce(plus)`.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// assert_eq!(vec![1, 2, 3].pipe(reduce(plus)), 6);
/// assert_eq!(vec![0.5, 0.25].pipe(reduce(plus)), 0.75);
/// ```
#[inline]
pub fn plus<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}

/// Stage built by [`reduce`].
#[derive(Debug, Clone, Copy)]
pub struct Reduce<F> {
    function: F,
}

/// Folds the elements with `function`, starting from the first element.
///
/// An empty input yields `Default::default()`; a single element is returned
/// unchanged without calling `function`.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// assert_eq!(Vec::<i32>::new().pipe(reduce(plus)), 0);
/// assert_eq!(vec![5].pipe(reduce(plus)), 5);
/// assert_eq!(vec![1, 2, 3].pipe(reduce(|left: i32, right: i32| left - right)), -4);
/// ```
#[inline]
pub const fn reduce<F>(function: F) -> Reduce<F> {
    Reduce { function }
}

impl<S, F> Operation<S> for Reduce<F>
where
    S: Sequence,
    S::Item: Default,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    type Output = S::Item;

    fn apply(&self, input: S) -> S::Item {
        let input_size = input.size();
        let reduced = fold_from_first(input, &self.function).unwrap_or_default();
        stage_trace!("reduce", input_size, 1_usize);
        reduced
    }
}

/// Stage built by [`reduce_first`].
#[derive(Debug, Clone, Copy)]
pub struct ReduceFirst<F> {
    function: F,
}

/// Folds the elements with `function`, failing on an empty input.
///
/// # Errors
///
/// Returns [`PipeError::EmptyReduction`] if the input has no elements.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let join = reduce_first(|left: String, right: String| format!("{left}, {right}"));
///
/// let names = vec!["ann".to_string(), "bob".to_string()];
/// assert_eq!(names.pipe(&join), Ok("ann, bob".to_string()));
/// assert_eq!(Vec::<String>::new().pipe(&join), Err(PipeError::EmptyReduction));
/// ```
#[inline]
pub const fn reduce_first<F>(function: F) -> ReduceFirst<F> {
    ReduceFirst { function }
}

impl<S, F> Operation<S> for ReduceFirst<F>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    type Output = Result<S::Item, PipeError>;

    fn apply(&self, input: S) -> Self::Output {
        let input_size = input.size();
        let Some(reduced) = fold_from_first(input, &self.function) else {
            stage_debug!("reduce_first", "empty input");
            return Err(PipeError::EmptyReduction);
        };
        stage_trace!("reduce_first", input_size, 1_usize);
        Ok(reduced)
    }
}

/// Stage built by [`fold`].
#[derive(Debug, Clone, Copy)]
pub struct Fold<B, F> {
    init: B,
    function: F,
}

/// Folds the elements into an accumulator of any type, starting at `init`.
///
/// The stage keeps `init` and clones it for every input it is applied to.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let total_length = fold(0, |total: usize, word: &str| total + word.len());
///
/// assert_eq!(vec!["ab", "c"].pipe(&total_length), 3);
/// assert_eq!(Vec::<&str>::new().pipe(&total_length), 0);
/// ```
#[inline]
pub const fn fold<B, F>(init: B, function: F) -> Fold<B, F> {
    Fold { init, function }
}

impl<S, B, F> Operation<S> for Fold<B, F>
where
    S: Sequence,
    B: Clone,
    F: Fn(B, S::Item) -> B,
{
    type Output = B;

    fn apply(&self, input: S) -> B {
        let input_size = input.size();
        let folded = input
            .into_iter()
            .take(input_size)
            .fold(self.init.clone(), |accumulator, element| {
                (self.function)(accumulator, element)
            });
        stage_trace!("fold", input_size, 1_usize);
        folded
    }
}

/// Left fold seeded with the first element; `None` when there is none.
fn fold_from_first<S, F>(input: S, function: &F) -> Option<S::Item>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    let input_size = input.size();
    let mut elements = input.into_iter().take(input_size);
    let first = elements.next()?;
    Some(elements.fold(first, function))
}
