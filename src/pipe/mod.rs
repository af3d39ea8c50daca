//! The pipe operator and stage composition.
//!
//! A pipeline stage is any value implementing [`Operation`]: it takes the
//! previous stage's output and produces the next value. This module provides
//! the ways to feed a value through stages from left to right:
//!
//! - [`Pipe::pipe`]: method syntax on every value, `source.pipe(stage)`
//! - [`pipe()`]: the free-function form, `pipe(source, stage)`
//! - [`Pipeline`]: a thin wrapper overloading `|`, `Pipeline::new(source) | stage`
//! - [`pipe!`](crate::pipe!): `pipe!(source, stage1, stage2, ...)`
//!
//! and to build stages out of other stages:
//!
//! - [`Compose::and_then`] / [`chain!`](crate::chain!): a reusable composite stage
//! - [`lift`]: any `Fn(S) -> R` as a stage
//!
//! # Laws
//!
//! ```text
//! pipe(x, f)                 == f.apply(x)
//! pipe(pipe(x, f), g)        == pipe(x, f.and_then(g))
//! f.and_then(g).and_then(h)  == f.and_then(g.and_then(h))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pipes::prelude::*;
//!
//! let evens_squared = filter(|value: &i32| value % 2 == 0)
//!     .and_then(map(|value: i32| value * value));
//!
//! assert_eq!(vec![1, 2, 3, 4].pipe(&evens_squared), vec![4, 16]);
//! assert_eq!(vec![6, 7].pipe(&evens_squared), vec![36]);
//!
//! let described = Pipeline::new(vec![3, 1, 2]) | sort() | lift(|values: Vec<i32>| format!("{values:?}"));
//! assert_eq!(described.into_inner(), "[1, 2, 3]");
//! ```

mod pipe_macro;

use std::ops::BitOr;

/// A pipeline stage: consumes an input and produces an output.
///
/// Stages hold only the user's function, never a sequence, so a single
/// stage value can be applied to any number of inputs. Shared references to
/// a stage are stages too.
///
/// The associated `Output` type is where shape inference happens: each
/// combinator computes it from the input type and the user function's
/// return type.
pub trait Operation<Input> {
    /// The value this stage produces.
    type Output;

    /// Runs the stage on `input`.
    fn apply(&self, input: Input) -> Self::Output;
}

impl<Input, O> Operation<Input> for &O
where
    O: Operation<Input> + ?Sized,
{
    type Output = O::Output;

    #[inline]
    fn apply(&self, input: Input) -> Self::Output {
        (**self).apply(input)
    }
}

/// Applies `operation` to `source`.
///
/// This is the pipe operator in function form: `pipe(x, op)` is exactly
/// `op.apply(x)`. Whatever the stage returns or panics with is passed
/// through untouched.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// assert_eq!(pipe(vec![1, 2, 3], map(|value: i32| value + 1)), vec![2, 3, 4]);
/// ```
#[inline]
pub fn pipe<Input, O>(source: Input, operation: O) -> O::Output
where
    O: Operation<Input>,
{
    operation.apply(source)
}

/// Method-call form of the pipe operator, available on every value.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let shouted = vec!["a", "b"]
///     .pipe(map(|letter: &str| letter.to_uppercase()))
///     .pipe(reduce(|left: String, right: String| left + &right));
/// assert_eq!(shouted, "AB");
/// ```
pub trait Pipe: Sized {
    /// Feeds `self` into `operation`.
    #[inline]
    fn pipe<O>(self, operation: O) -> O::Output
    where
        O: Operation<Self>,
    {
        operation.apply(self)
    }
}

impl<T> Pipe for T {}

/// A value flowing through a pipeline, chained with the `|` operator.
///
/// `Pipeline` only exists for the syntax: `Pipeline::new(x) | f | g` reads
/// like a shell pipe and evaluates to `Pipeline::new(g(f(x)))`. Take the
/// value out with [`Pipeline::into_inner`].
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let result = Pipeline::new(vec![5, 3, 8])
///     | filter(|value: &i32| *value > 3)
///     | sort()
///     | map(|value: i32| value.to_string());
///
/// assert_eq!(result.into_inner(), vec!["5", "8"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pipeline<T>(T);

impl<T> Pipeline<T> {
    /// Wraps a source value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Applies `operation`, keeping the result wrapped.
    #[inline]
    pub fn then<O>(self, operation: O) -> Pipeline<O::Output>
    where
        O: Operation<T>,
    {
        Pipeline(operation.apply(self.0))
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Pipeline<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T, O> BitOr<O> for Pipeline<T>
where
    O: Operation<T>,
{
    type Output = Pipeline<O::Output>;

    #[inline]
    fn bitor(self, operation: O) -> Self::Output {
        self.then(operation)
    }
}

/// Sequential composition of stages, available on every value.
///
/// Composition does not look at the input type: `first.and_then(second)`
/// only becomes a stage for `Input` when `first` accepts `Input` and
/// `second` accepts what `first` produces.
pub trait Compose: Sized {
    /// Composes this stage with `next`, producing a stage that runs `self`
    /// and then `next` on its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipes::prelude::*;
    ///
    /// let total_length = map(|word: &str| word.len()).and_then(reduce(plus));
    /// assert_eq!(total_length.apply(vec!["ab", "cde"]), 5);
    /// ```
    #[inline]
    fn and_then<Next>(self, next: Next) -> Then<Self, Next> {
        Then {
            first: self,
            second: next,
        }
    }
}

impl<T> Compose for T {}

/// Two stages run one after the other. Built by [`Compose::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct Then<First, Second> {
    first: First,
    second: Second,
}

impl<Input, First, Second> Operation<Input> for Then<First, Second>
where
    First: Operation<Input>,
    Second: Operation<First::Output>,
{
    type Output = Second::Output;

    #[inline]
    fn apply(&self, input: Input) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }
}

/// A plain function used as a stage. Built by [`lift`].
#[derive(Debug, Clone, Copy)]
pub struct Lift<F> {
    function: F,
}

/// Turns any `Fn(Input) -> R` into a pipeline stage.
///
/// # Examples
///
/// ```rust
/// use pipes::prelude::*;
///
/// let count = lift(|values: Vec<u8>| values.len());
/// assert_eq!(vec![1_u8, 2, 3].pipe(count), 3);
/// ```
#[inline]
pub const fn lift<F>(function: F) -> Lift<F> {
    Lift { function }
}

impl<Input, R, F> Operation<Input> for Lift<F>
where
    F: Fn(Input) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, input: Input) -> R {
        (self.function)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn increment() -> Lift<impl Fn(i32) -> i32> {
        lift(|value: i32| value + 1)
    }

    fn double() -> Lift<impl Fn(i32) -> i32> {
        lift(|value: i32| value * 2)
    }

    #[rstest]
    fn pipe_function_delegates_to_apply() {
        assert_eq!(pipe(3, increment()), 4);
    }

    #[rstest]
    fn pipe_method_reads_left_to_right() {
        // double(3) = 6, increment(6) = 7
        assert_eq!(3.pipe(double()).pipe(increment()), 7);
    }

    #[rstest]
    fn bitor_matches_method_chain() {
        let piped = (Pipeline::new(3) | double() | increment()).into_inner();
        assert_eq!(piped, 3.pipe(double()).pipe(increment()));
    }

    #[rstest]
    fn and_then_is_associative() {
        let left = increment().and_then(double()).and_then(increment());
        let right = increment().and_then(double().and_then(increment()));
        for value in -5..5 {
            assert_eq!(left.apply(value), right.apply(value));
        }
    }

    #[rstest]
    fn reference_to_stage_is_reusable() {
        let stage = double();
        assert_eq!(1.pipe(&stage), 2);
        assert_eq!(10.pipe(&stage), 20);
    }

    #[rstest]
    fn pipeline_get_and_from() {
        let pipeline: Pipeline<&str> = "value".into();
        assert_eq!(*pipeline.get(), "value");
    }
}
