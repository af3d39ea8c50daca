//! `for_each` and `for_each_entry`: observe a pipeline without changing it.

use crate::pipe::Operation;
use crate::sequence::Sequence;

/// Stage built by [`for_each`].
#[derive(Debug, Clone, Copy)]
pub struct ForEach<F> {
    function: F,
}

/// Calls `function` on every element and passes the input through.
///
/// This is the one stage that does not build a new container: the value it
/// returns is the very value it was given (same allocation, same elements),
/// so it can sit in the middle of a pipeline for logging or counting.
/// `function` runs once per element, in traversal order.
///
/// Map-like containers traverse as `(&K, &V)`; use [`for_each_entry`] for
/// them.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let total = vec![1, 2, 3]
///     .pipe(for_each(|value: &i32| seen.borrow_mut().push(*value)))
///     .pipe(reduce(plus));
///
/// assert_eq!(total, 6);
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn for_each<F>(function: F) -> ForEach<F> {
    ForEach { function }
}

impl<S, F> Operation<S> for ForEach<F>
where
    S: Sequence,
    for<'a> &'a S: IntoIterator<Item = &'a S::Item>,
    F: Fn(&S::Item),
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        for element in &input {
            (self.function)(element);
        }
        stage_trace!("for_each", input.size(), input.size());
        input
    }
}

/// Stage built by [`for_each_entry`].
#[derive(Debug, Clone, Copy)]
pub struct ForEachEntry<F> {
    function: F,
}

/// Calls `function` on every key-value entry of a map-like container and
/// passes the input through.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::cell::Cell;
/// use std::collections::BTreeMap;
///
/// let total = Cell::new(0);
/// let stock = BTreeMap::from([("mayo", 4), ("tomato", 3)])
///     .pipe(for_each_entry(|_: &&str, count: &i32| total.set(total.get() + count)));
///
/// assert_eq!(total.get(), 7);
/// assert_eq!(stock.len(), 2);
/// ```
#[inline]
pub const fn for_each_entry<F>(function: F) -> ForEachEntry<F> {
    ForEachEntry { function }
}

impl<S, F, K, V> Operation<S> for ForEachEntry<F>
where
    S: Sequence<Item = (K, V)>,
    for<'a> &'a S: IntoIterator<Item = (&'a K, &'a V)>,
    F: Fn(&K, &V),
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        for (key, value) in &input {
            (self.function)(key, value);
        }
        stage_trace!("for_each_entry", input.size(), input.size());
        input
    }
}
