//! `collect` and `collect_into`: map and filter in one pass.

use std::marker::PhantomData;

use crate::pipe::Operation;
use crate::sequence::{Rebind, Sequence};

/// Stage built by [`collect`].
#[derive(Debug, Clone, Copy)]
pub struct Collect<F> {
    function: F,
}

/// Keeps the `Some` results of `function`, dropping every `None`.
///
/// Equivalent to a `map` into `Option` followed by a `filter` on
/// `is_some`, except that no container of `Option`s is ever built: only kept
/// values are inserted. The output never has more elements than the input.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let numbers = vec!["4", "four", "2"].pipe(collect(|text: &str| text.parse::<u8>().ok()));
/// assert_eq!(numbers, vec![4, 2]);
/// ```
#[inline]
pub const fn collect<F>(function: F) -> Collect<F> {
    Collect { function }
}

impl<S, F, B> Operation<S> for Collect<F>
where
    S: Rebind<B>,
    F: Fn(S::Item) -> Option<B>,
{
    type Output = <S as Rebind<B>>::Output;

    fn apply(&self, input: S) -> Self::Output {
        keep_present(input, &self.function, "collect")
    }
}

/// Stage built by [`collect_into`].
pub struct CollectInto<C, F> {
    function: F,
    shape: PhantomData<fn() -> C>,
}

/// Like [`collect`], but the caller names the output container.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::{BTreeSet, HashMap};
///
/// let scores = HashMap::from([("ann", 7), ("bob", 3), ("cy", 9)]);
/// let passed = scores.pipe(collect_into::<BTreeSet<&str>, _>(
///     |(name, score): (&'static str, i32)| (score >= 5).then_some(name),
/// ));
/// assert_eq!(passed, BTreeSet::from(["ann", "cy"]));
/// ```
#[inline]
pub const fn collect_into<C, F>(function: F) -> CollectInto<C, F> {
    CollectInto {
        function,
        shape: PhantomData,
    }
}

impl<S, C, F> Operation<S> for CollectInto<C, F>
where
    S: Sequence,
    C: Sequence,
    F: Fn(S::Item) -> Option<C::Item>,
{
    type Output = C;

    fn apply(&self, input: S) -> C {
        keep_present(input, &self.function, "collect_into")
    }
}

impl<C, F: Clone> Clone for CollectInto<C, F> {
    fn clone(&self) -> Self {
        collect_into(self.function.clone())
    }
}

impl<C, F> std::fmt::Debug for CollectInto<C, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CollectInto")
            .field("shape", &std::any::type_name::<C>())
            .finish_non_exhaustive()
    }
}

fn keep_present<S, C, F>(input: S, function: &F, operation: &'static str) -> C
where
    S: Sequence,
    C: Sequence,
    F: Fn(S::Item) -> Option<C::Item>,
{
    let input_size = input.size();
    let mut output = C::empty();
    for element in input {
        if let Some(kept) = function(element) {
            output.push_back(kept);
        }
    }
    stage_trace!(operation, input_size, output.size());
    output
}
