//! `filter` and `try_filter`.

use crate::pipe::Operation;
use crate::sequence::Sequence;

/// Stage built by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// The output has the input's container type and the kept elements in
/// their original relative order.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
/// use std::collections::HashMap;
///
/// let small = vec![5, 1, 8, 2].pipe(filter(|value: &i32| *value < 5));
/// assert_eq!(small, vec![1, 2]);
///
/// let stock = HashMap::from([("tomato", 0), ("mayo", 4)]);
/// let available = stock.pipe(filter(|(_, count): &(&str, i32)| *count > 0));
/// assert_eq!(available.len(), 1);
/// assert!(available.contains_key("mayo"));
/// ```
#[inline]
pub const fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

impl<S, P> Operation<S> for Filter<P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Output = S;

    fn apply(&self, input: S) -> S {
        let input_size = input.size();
        let mut output = S::empty();
        for element in input {
            if (self.predicate)(&element) {
                output.push_back(element);
            }
        }
        stage_trace!("filter", input_size, output.size());
        output
    }
}

/// Stage built by [`try_filter`].
#[derive(Debug, Clone, Copy)]
pub struct TryFilter<P> {
    predicate: P,
}

/// Like [`filter`] for a fallible `predicate`.
///
/// The first `Err` aborts the stage and is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let positive = try_filter(|text: &&str| text.parse::<i32>().map(|value| value > 0));
///
/// assert_eq!(vec!["3", "-1", "7"].pipe(&positive), Ok(vec!["3", "7"]));
/// assert!(vec!["3", "seven"].pipe(&positive).is_err());
/// ```
#[inline]
pub const fn try_filter<P>(predicate: P) -> TryFilter<P> {
    TryFilter { predicate }
}

impl<S, P, E> Operation<S> for TryFilter<P>
where
    S: Sequence,
    P: Fn(&S::Item) -> Result<bool, E>,
{
    type Output = Result<S, E>;

    fn apply(&self, input: S) -> Self::Output {
        let input_size = input.size();
        let mut output = S::empty();
        for element in input {
            if (self.predicate)(&element)? {
                output.push_back(element);
            }
        }
        stage_trace!("try_filter", input_size, output.size());
        Ok(output)
    }
}
