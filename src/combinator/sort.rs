//! `sort`, `sort_by`, `sort_by_less` and `sort_by_key`.
//!
//! All four reorder a [`Positional`] container with an unstable sort:
//! elements that compare equal may come out in any order. Sets and maps
//! keep their own order and cannot be sorted.

use std::cmp::Ordering;

use crate::pipe::Operation;
use crate::sequence::{Positional, Sequence};

/// Stage built by [`sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort;

/// Sorts by the elements' natural ordering.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// assert_eq!(vec![3, 1, 2].pipe(sort()), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn sort() -> Sort {
    Sort
}

impl<S> Operation<S> for Sort
where
    S: Positional,
    S::Item: Ord,
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        reorder(input, Ord::cmp, "sort")
    }
}

/// Stage built by [`sort_by`].
#[derive(Debug, Clone, Copy)]
pub struct SortBy<F> {
    compare: F,
}

/// Sorts with a three-way comparator.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let descending = vec![1, 3, 2].pipe(sort_by(|left: &i32, right: &i32| right.cmp(left)));
/// assert_eq!(descending, vec![3, 2, 1]);
/// ```
#[inline]
pub const fn sort_by<F>(compare: F) -> SortBy<F> {
    SortBy { compare }
}

impl<S, F> Operation<S> for SortBy<F>
where
    S: Positional,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        reorder(input, |left, right| (self.compare)(left, right), "sort_by")
    }
}

/// Stage built by [`sort_by_less`].
#[derive(Debug, Clone, Copy)]
pub struct SortByLess<F> {
    less: F,
}

/// Sorts with a "less than" predicate.
///
/// `less` must be a strict weak ordering: irreflexive, transitive, and with
/// incomparability transitive as well. Two elements neither of which is less
/// than the other are treated as equal.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let by_length = vec!["ccc", "a", "bb"]
///     .pipe(sort_by_less(|left: &&str, right: &&str| left.len() < right.len()));
/// assert_eq!(by_length, vec!["a", "bb", "ccc"]);
/// ```
#[inline]
pub const fn sort_by_less<F>(less: F) -> SortByLess<F> {
    SortByLess { less }
}

impl<S, F> Operation<S> for SortByLess<F>
where
    S: Positional,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        reorder(
            input,
            |left, right| {
                if (self.less)(left, right) {
                    Ordering::Less
                } else if (self.less)(right, left) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            },
            "sort_by_less",
        )
    }
}

/// Stage built by [`sort_by_key`].
#[derive(Debug, Clone, Copy)]
pub struct SortByKey<F> {
    key: F,
}

/// Sorts by a key extracted from each element.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let by_quantity = vec![("mayo", 4), ("patty", 1)]
///     .pipe(sort_by_key(|(_, quantity): &(&str, u32)| *quantity));
/// assert_eq!(by_quantity, vec![("patty", 1), ("mayo", 4)]);
/// ```
#[inline]
pub const fn sort_by_key<F>(key: F) -> SortByKey<F> {
    SortByKey { key }
}

impl<S, F, K> Operation<S> for SortByKey<F>
where
    S: Positional,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        reorder(
            input,
            |left, right| (self.key)(left).cmp(&(self.key)(right)),
            "sort_by_key",
        )
    }
}

fn reorder<S, F>(input: S, compare: F, operation: &'static str) -> S
where
    S: Positional,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let output = input.sort_unstable_with(compare);
    stage_trace!(operation, output.size(), output.size());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::Pipe;
    use rstest::rstest;
    use std::collections::{LinkedList, VecDeque};

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![5, -1, 3, 3], vec![-1, 3, 3, 5])]
    fn sort_orders_naturally(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(input.pipe(sort()), expected);
    }

    #[rstest]
    fn sort_leaves_cloned_source_untouched() {
        let source = vec![2, 1];
        let sorted = source.clone().pipe(sort());
        assert_eq!(source, vec![2, 1]);
        assert_eq!(sorted, vec![1, 2]);
    }

    #[rstest]
    fn sort_by_less_on_deque() {
        let deque = VecDeque::from(vec![3.5, -1.0, 2.25]);
        let sorted = deque.pipe(sort_by_less(|left: &f64, right: &f64| left < right));
        assert_eq!(sorted, VecDeque::from(vec![-1.0, 2.25, 3.5]));
    }

    #[rstest]
    fn sort_by_key_on_list() {
        let list: LinkedList<&str> = ["pickles", "mayo", "tomato"].into_iter().collect();
        let sorted = list.pipe(sort_by_key(|name: &&str| name.len()));
        assert!(sorted.into_iter().eq(["mayo", "tomato", "pickles"]));
    }

    #[rstest]
    fn sort_is_idempotent() {
        let once = vec![4, 2, 9, 2].pipe(sort());
        let twice = once.clone().pipe(sort());
        assert_eq!(once, twice);
    }
}
