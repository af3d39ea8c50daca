//! `flatmap` and `flatmap_into`.
//!
//! Both run in two passes: the user function first produces every
//! sub-sequence, then their sizes are summed so the flattened output is
//! allocated exactly once with the final capacity.

use std::marker::PhantomData;

use crate::pipe::Operation;
use crate::sequence::{Rebind, Sequence};

/// Stage built by [`flatmap`].
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<F> {
    function: F,
}

/// Maps every element to a sub-sequence and concatenates the results.
///
/// Sub-sequences appear in the order of the elements that produced them.
/// The output length is the sum of the sub-sequence lengths. Sub-sequences
/// may be any [`Sequence`]; the output keeps the input's shape.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let repeated = vec![1, 2, 3].pipe(flatmap(|value: usize| vec![value; value]));
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
/// ```
#[inline]
pub const fn flatmap<F>(function: F) -> FlatMap<F> {
    FlatMap { function }
}

impl<S, F, Inner> Operation<S> for FlatMap<F>
where
    Inner: Sequence,
    S: Rebind<Inner::Item>,
    F: Fn(S::Item) -> Inner,
{
    type Output = <S as Rebind<Inner::Item>>::Output;

    fn apply(&self, input: S) -> Self::Output {
        flatten(input, &self.function, "flatmap")
    }
}

/// Stage built by [`flatmap_into`].
pub struct FlatMapInto<C, F> {
    function: F,
    shape: PhantomData<fn() -> C>,
}

/// Like [`flatmap`], but the caller names the output container.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::{BTreeSet, LinkedList};
///
/// let words = vec!["ab", "ba"];
/// let letters = words.pipe(flatmap_into::<BTreeSet<char>, _>(|word: &str| {
///     word.chars().collect::<LinkedList<_>>()
/// }));
/// assert_eq!(letters, BTreeSet::from(['a', 'b']));
/// ```
#[inline]
pub const fn flatmap_into<C, F>(function: F) -> FlatMapInto<C, F> {
    FlatMapInto {
        function,
        shape: PhantomData,
    }
}

impl<S, C, F, Inner> Operation<S> for FlatMapInto<C, F>
where
    S: Sequence,
    C: Sequence,
    Inner: Sequence<Item = C::Item>,
    F: Fn(S::Item) -> Inner,
{
    type Output = C;

    fn apply(&self, input: S) -> C {
        flatten(input, &self.function, "flatmap_into")
    }
}

impl<C, F: Clone> Clone for FlatMapInto<C, F> {
    fn clone(&self) -> Self {
        flatmap_into(self.function.clone())
    }
}

impl<C, F> std::fmt::Debug for FlatMapInto<C, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FlatMapInto")
            .field("shape", &std::any::type_name::<C>())
            .finish_non_exhaustive()
    }
}

fn flatten<S, C, F, Inner>(input: S, function: &F, operation: &'static str) -> C
where
    S: Sequence,
    C: Sequence,
    Inner: Sequence<Item = C::Item>,
    F: Fn(S::Item) -> Inner,
{
    let input_size = input.size();
    let parts: Vec<Inner> = input.into_iter().map(function).collect();

    let total_size = parts.iter().map(Sequence::size).sum();
    let mut output = C::with_capacity(total_size);
    for part in parts {
        for element in part {
            output.push_back(element);
        }
    }

    stage_trace!(operation, input_size, output.size());
    output
}
