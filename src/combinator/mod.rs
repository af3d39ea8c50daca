//! Combinator factories.
//!
//! Each factory takes a user function and returns a stage (an
//! [`Operation`](crate::pipe::Operation)) that works on any container
//! implementing [`Sequence`](crate::sequence::Sequence). The stage does not
//! know its input type until it is piped a value, so one stage can serve
//! `Vec`, `VecDeque`, `LinkedList`, sets and maps alike.
//!
//! | Factory | User function | Output |
//! |---|---|---|
//! | [`map`] | `E -> T` | same shape of `T` |
//! | [`map_into`] | `E -> T` | caller-named container of `T` |
//! | [`try_map`] | `E -> Result<T, Err>` | `Result<same shape of T, Err>` |
//! | [`flatmap`] | `E -> Sequence<T>` | same shape of `T`, flattened |
//! | [`collect`] | `E -> Option<T>` | same shape of the kept `T` |
//! | [`filter`] | `&E -> bool` | same container |
//! | [`try_filter`] | `&E -> Result<bool, Err>` | `Result<same container, Err>` |
//! | [`sort`], [`sort_by`], [`sort_by_less`], [`sort_by_key`] | comparator | same container, reordered |
//! | [`reduce`] | `(E, E) -> E` | `E` (default when empty) |
//! | [`reduce_first`] | `(E, E) -> E` | `Result<E, PipeError>` |
//! | [`fold`] | `(A, E) -> A` | `A` |
//! | [`for_each`] | `&E -> ()` | the input, unchanged |
//! | [`for_each_entry`] | `(&K, &V) -> ()` | the input map, unchanged |
//!
//! [`range`] and [`range_into`] are sources rather than stages: they build
//! the first sequence of a pipeline.
//!
//! # Evaluation
//!
//! Every stage is eager. It runs the user function over the whole input,
//! builds its output container (capacity first, then end-insertion) and
//! only then returns. User functions are called once per element, in the
//! input's traversal order.
//!
//! # Examples
//!
//! ```rust
//! use pipes::prelude::*;
//! use std::collections::{HashMap, LinkedList};
//!
//! // Shape preserving: a LinkedList stays a LinkedList.
//! let lengths: LinkedList<usize> = ["a", "bb", "ccc"]
//!     .into_iter()
//!     .collect::<LinkedList<_>>()
//!     .pipe(map(|word: &str| word.len()));
//! assert!(lengths.into_iter().eq([1, 2, 3]));
//!
//! // Shape overriding: the pairs of a map become a sorted Vec of strings.
//! let stock = HashMap::from([("tomato", 3), ("mayo", 4)]);
//! let labels = stock
//!     .pipe(map_into::<Vec<String>, _>(|(name, count): (&str, i32)| format!("{name}:{count}")))
//!     .pipe(sort());
//! assert_eq!(labels, vec!["mayo:4", "tomato:3"]);
//! ```

mod collect;
mod filter;
mod flatmap;
mod for_each;
mod map;
mod range;
mod reduce;
mod sort;

pub use collect::{Collect, CollectInto, collect, collect_into};
pub use filter::{Filter, TryFilter, filter, try_filter};
pub use flatmap::{FlatMap, FlatMapInto, flatmap, flatmap_into};
pub use for_each::{ForEach, ForEachEntry, for_each, for_each_entry};
pub use map::{Map, MapInto, TryMap, map, map_into, try_map};
pub use range::{Step, range, range_into};
pub use reduce::{Fold, Reduce, ReduceFirst, fold, plus, reduce, reduce_first};
pub use sort::{Sort, SortBy, SortByKey, SortByLess, sort, sort_by, sort_by_key, sort_by_less};
