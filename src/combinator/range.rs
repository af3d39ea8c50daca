//! `range` and `range_into`: pipeline sources.

use crate::sequence::Sequence;

/// Types with a successor, usable as [`range`] bounds.
///
/// Implemented for every primitive integer type.
pub trait Step: Clone + PartialOrd {
    /// Returns the next value: `self + 1`.
    ///
    /// Only called on values strictly below some other value of the type,
    /// so it never has to handle the maximum.
    fn successor(&self) -> Self;

    /// Returns the number of successor steps from `start` to `end`, or `0`
    /// if `end` is not greater than `start`. Saturates at `usize::MAX`.
    fn steps_between(start: &Self, end: &Self) -> usize;
}

macro_rules! impl_step {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Step for $integer {
                #[inline]
                fn successor(&self) -> Self {
                    *self + 1
                }

                #[inline]
                fn steps_between(start: &Self, end: &Self) -> usize {
                    if end > start {
                        usize::try_from(end.abs_diff(*start)).unwrap_or(usize::MAX)
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_step!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Builds the vector `[begin, begin + 1, ..., end - 1]`.
///
/// An `end` that is not greater than `begin` gives an empty vector.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// assert_eq!(range(0, 3), vec![0, 1, 2]);
/// assert!(range(4, 4).is_empty());
///
/// let squares = range(1_u32, 4).pipe(map(|value: u32| value * value));
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[inline]
pub fn range<T: Step>(begin: T, end: T) -> Vec<T> {
    range_into(begin, end)
}

/// Like [`range`], into any [`Sequence`].
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::LinkedList;
///
/// let countdown = range_into::<LinkedList<i8>, _>(-2, 1);
/// assert!(countdown.into_iter().eq([-2, -1, 0]));
/// ```
pub fn range_into<C, T>(begin: T, end: T) -> C
where
    C: Sequence<Item = T>,
    T: Step,
{
    let steps = T::steps_between(&begin, &end);
    let mut output = C::with_capacity(steps);
    let mut current = begin;
    while current < end {
        let next = current.successor();
        output.push_back(current);
        current = next;
    }
    stage_trace!("range", steps, output.size());
    output
}
