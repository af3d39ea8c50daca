//! Container capability contract and shape inference.
//!
//! A pipeline never names a concrete container. Every combinator is written
//! against three traits:
//!
//! - [`Sequence`]: what a container must offer to take part in a pipeline
//!   (size query, forward traversal, end-insertion, construction with a
//!   capacity hint)
//! - [`Rebind`]: the same container shape holding a different element type
//!   (`Vec<A>` becomes `Vec<B>`, `HashMap<K, V>` becomes `HashMap<K2, V2>`)
//! - [`Positional`]: containers whose order is decided by position, and can
//!   therefore be sorted
//!
//! # Shape Inference
//!
//! Rust has no higher-kinded types, so "the same container, other element"
//! is expressed as a trait parameterized by the new element type, in the
//! same spirit as a GAT-based type constructor:
//!
//! ```text
//! <Vec<A>          as Rebind<B>>::Output        = Vec<B>
//! <LinkedList<A>   as Rebind<B>>::Output        = LinkedList<B>
//! <HashMap<K, V>   as Rebind<(K2, V2)>>::Output = HashMap<K2, V2>
//! ```
//!
//! Map-like containers only rebind to pair elements. Mapping a `HashMap`
//! into plain strings without naming another output shape is rejected at
//! compile time.
//!
//! # Examples
//!
//! ```rust
//! use pipes::sequence::{Rebind, Sequence};
//!
//! fn double_all<S>(source: S) -> <S as Rebind<i64>>::Output
//! where
//!     S: Rebind<i64, Item = i32>,
//! {
//!     let mut output = <S as Rebind<i64>>::Output::with_capacity(source.size());
//!     for element in source {
//!         output.push_back(i64::from(element) * 2);
//!     }
//!     output
//! }
//!
//! assert_eq!(double_all(vec![1, 2, 3]), vec![2_i64, 4, 6]);
//! ```

use std::cmp::Ordering;

mod std_impls;

#[cfg(feature = "smallvec")]
mod smallvec_impls;

/// A finite, ordered container usable as a pipeline stage's input or output.
///
/// Forward traversal comes from the [`IntoIterator`] supertrait; its `Item`
/// is the element type. Map-like containers traverse as `(key, value)` pairs.
///
/// # Laws
///
/// - **Size**: `source.size() == source.into_iter().count()`
/// - **Append**: after `push_back(x)` on a positional container, `x` is the
///   last element of the traversal
///
/// # Examples
///
/// ```rust
/// use pipes::sequence::Sequence;
/// use std::collections::VecDeque;
///
/// let mut deque: VecDeque<char> = Sequence::with_capacity(2);
/// deque.push_back('a');
/// Sequence::push_back(&mut deque, 'b');
/// assert_eq!(Sequence::size(&deque), 2);
/// ```
pub trait Sequence: IntoIterator + Sized {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Creates an empty container, reserving room for `capacity` elements
    /// where the container supports reservation.
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts an element at the end of the traversal order.
    ///
    /// Key-unique containers keep the most recently inserted value for a
    /// repeated key.
    fn push_back(&mut self, element: Self::Item);

    /// Creates an empty container without reserving.
    #[inline]
    fn empty() -> Self {
        Self::with_capacity(0)
    }

    /// Returns `true` if the container has no elements.
    #[inline]
    fn is_empty_sequence(&self) -> bool {
        self.size() == 0
    }
}

/// The same container shape holding elements of type `B`.
///
/// This is the shape-inference layer: shape-preserving combinators such as
/// `map` compute their output type as `<S as Rebind<B>>::Output`, where `B`
/// is the return type of the user's function.
pub trait Rebind<B>: Sequence {
    /// The rebound container type.
    type Output: Sequence<Item = B>;
}

/// A container whose traversal order is positional (array, list, deque).
///
/// Sets and maps order their elements themselves and do not implement this
/// trait, so sorting them does not compile.
pub trait Positional: Sequence {
    /// Reorders the elements so that consecutive elements satisfy `compare`.
    ///
    /// The sort is unstable: equal elements may be reordered.
    fn sort_unstable_with<F>(self, compare: F) -> Self
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

/// Element type of a [`Sequence`].
pub type ElementOf<S> = <S as IntoIterator>::Item;
