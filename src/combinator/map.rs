//! `map`, `map_into` and `try_map`.

use std::marker::PhantomData;

use crate::pipe::Operation;
use crate::sequence::{Rebind, Sequence};

/// Stage built by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    function: F,
}

/// Applies `function` to every element, keeping the container shape.
///
/// The output has the same length as the input and element `i` of the
/// output is `function(element i of the input)`. The output element type is
/// whatever `function` returns; the container shape is the input's, rebound
/// through [`Rebind`]. Map-like containers hand each `(key, value)` pair to
/// `function` and must get a pair back; use [`map_into`] to leave the map
/// shape.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::HashMap;
///
/// let doubled = vec![1, 2, 3].pipe(map(|value: i32| value * 2));
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let prices = HashMap::from([("tea".to_string(), 3_u32)]);
/// let in_cents = prices.pipe(map(|(item, price): (String, u32)| (item, price * 100)));
/// assert_eq!(in_cents["tea"], 300);
/// ```
#[inline]
pub const fn map<F>(function: F) -> Map<F> {
    Map { function }
}

impl<S, F, B> Operation<S> for Map<F>
where
    S: Rebind<B>,
    F: Fn(S::Item) -> B,
{
    type Output = <S as Rebind<B>>::Output;

    fn apply(&self, input: S) -> Self::Output {
        transform(input, &self.function, "map")
    }
}

/// Stage built by [`map_into`].
pub struct MapInto<C, F> {
    function: F,
    shape: PhantomData<fn() -> C>,
}

/// Like [`map`], but the caller names the output container.
///
/// Useful to leave a map-like shape (turning key-value pairs into a flat
/// list) or to switch between positional containers.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::{BTreeMap, VecDeque};
///
/// let ages = BTreeMap::from([("ann", 31), ("bob", 27)]);
/// let names = ages.pipe(map_into::<VecDeque<&str>, _>(|(name, _): (&'static str, i32)| name));
/// assert_eq!(names, VecDeque::from(vec!["ann", "bob"]));
/// ```
#[inline]
pub const fn map_into<C, F>(function: F) -> MapInto<C, F> {
    MapInto {
        function,
        shape: PhantomData,
    }
}

impl<S, C, F> Operation<S> for MapInto<C, F>
where
    S: Sequence,
    C: Sequence,
    F: Fn(S::Item) -> C::Item,
{
    type Output = C;

    fn apply(&self, input: S) -> C {
        transform(input, &self.function, "map_into")
    }
}

impl<C, F: Clone> Clone for MapInto<C, F> {
    fn clone(&self) -> Self {
        map_into(self.function.clone())
    }
}

impl<C, F> std::fmt::Debug for MapInto<C, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapInto")
            .field("shape", &std::any::type_name::<C>())
            .finish_non_exhaustive()
    }
}

/// Stage built by [`try_map`].
#[derive(Debug, Clone, Copy)]
pub struct TryMap<F> {
    function: F,
}

/// Like [`map`] for a fallible `function`.
///
/// Stops at the first `Err`, which is returned as is; no partially built
/// container escapes.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let parse = try_map(|text: &str| text.parse::<i32>());
///
/// assert_eq!(vec!["1", "2"].pipe(&parse), Ok(vec![1, 2]));
/// assert!(vec!["1", "x", "3"].pipe(&parse).is_err());
/// ```
#[inline]
pub const fn try_map<F>(function: F) -> TryMap<F> {
    TryMap { function }
}

impl<S, F, B, E> Operation<S> for TryMap<F>
where
    S: Rebind<B>,
    F: Fn(S::Item) -> Result<B, E>,
{
    type Output = Result<<S as Rebind<B>>::Output, E>;

    fn apply(&self, input: S) -> Self::Output {
        let input_size = input.size();
        let mut output = <S as Rebind<B>>::Output::with_capacity(input_size);
        for element in input {
            output.push_back((self.function)(element)?);
        }
        stage_trace!("try_map", input_size, output.size());
        Ok(output)
    }
}

/// One output element per input element, into a container of type `C`.
fn transform<S, C, F>(input: S, function: &F, operation: &'static str) -> C
where
    S: Sequence,
    C: Sequence,
    F: Fn(S::Item) -> C::Item,
{
    let input_size = input.size();
    let mut output = C::with_capacity(input_size);
    for element in input {
        output.push_back(function(element));
    }
    stage_trace!(operation, input_size, output.size());
    output
}
