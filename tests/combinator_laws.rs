//! Property-based tests for the combinator laws.
//!
//! - **Partition**: `filter(p)` and `filter(!p)` split a sequence in two,
//!   each keeping the original relative order
//! - **Map**: `map(f)` keeps the length and applies `f` element by element
//! - **Collect**: `collect(|x| p(x).then_some(x))` equals `filter(p)`
//! - **Flatmap**: the output length is the sum of the inner lengths
//! - **Sort**: idempotent, and a permutation of its input
//! - **Reduce**: a left fold; empty input gives `Default` (or an error for
//!   `reduce_first`)
//! - **For each**: called once per element in order, input passed through
//! - **Compose**: `x.pipe(f).pipe(g) == x.pipe(f.and_then(g))`

use pipes::prelude::*;
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

// =============================================================================
// filter
// =============================================================================

proptest! {
    /// Partition law: the two halves add up to the input
    #[test]
    fn prop_filter_partition_law(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let kept = values.clone().pipe(filter(is_even));
        let dropped = values.clone().pipe(filter(|value: &i32| !is_even(value)));

        prop_assert_eq!(kept.len() + dropped.len(), values.len());

        let expected_kept: Vec<i32> = values.iter().copied().filter(is_even).collect();
        let expected_dropped: Vec<i32> = values.iter().copied().filter(|value| !is_even(value)).collect();
        prop_assert_eq!(kept, expected_kept);
        prop_assert_eq!(dropped, expected_dropped);
    }

    /// Filtering a map keeps exactly the matching entries
    #[test]
    fn prop_filter_map_partition_law(entries in prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..32)) {
        let kept = entries.clone().pipe(filter(|(_, value): &(u8, i32)| is_even(value)));
        let dropped = entries.clone().pipe(filter(|(_, value): &(u8, i32)| !is_even(value)));

        prop_assert_eq!(kept.len() + dropped.len(), entries.len());
        prop_assert!(kept.keys().all(|key| !dropped.contains_key(key)));
    }
}

// =============================================================================
// map
// =============================================================================

proptest! {
    /// Map law: same length, element i is f(element i)
    #[test]
    fn prop_map_elementwise_law(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let function = |value: i32| i64::from(value) * 3 - 1;
        let mapped = values.clone().pipe(map(function));

        prop_assert_eq!(mapped.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(mapped[index], function(*value));
        }
    }

    /// Identity law: mapping with identity returns the input
    #[test]
    fn prop_map_identity_law(values in prop::collection::vec_deque(any::<u16>(), 0..64)) {
        let mapped = values.clone().pipe(map(|value: u16| value));
        prop_assert_eq!(mapped, values);
    }

    /// Composition law: two maps equal one map of the composed function
    #[test]
    fn prop_map_composition_law(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let first = |value: i32| value.wrapping_add(7);
        let second = |value: i32| value.wrapping_mul(2);

        let left = values.clone().pipe(map(first)).pipe(map(second));
        let right = values.pipe(map(move |value: i32| second(first(value))));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// collect
// =============================================================================

proptest! {
    /// Collect law: an optional predicate collects what filter keeps
    #[test]
    fn prop_collect_equals_filter_law(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let collected = values.clone().pipe(collect(|value: i32| is_even(&value).then_some(value)));
        let filtered = values.pipe(filter(is_even));

        prop_assert_eq!(collected, filtered);
    }
}

// =============================================================================
// flatmap
// =============================================================================

proptest! {
    /// Flatmap law: the output length is the sum of the part lengths
    #[test]
    fn prop_flatmap_length_law(counts in prop::collection::vec(0_usize..8, 0..32)) {
        let flattened = counts.clone().pipe(flatmap(|count: usize| vec![count; count]));
        prop_assert_eq!(flattened.len(), counts.iter().sum::<usize>());
    }

    /// Flatmap law: parts are concatenated in source order
    #[test]
    fn prop_flatmap_order_law(values in prop::collection::vec(any::<u8>(), 0..32)) {
        let flattened = values.clone().pipe(flatmap(|value: u8| vec![value, value]));
        let expected: Vec<u8> = values.iter().flat_map(|value| [*value, *value]).collect();
        prop_assert_eq!(flattened, expected);
    }
}

// =============================================================================
// sort
// =============================================================================

proptest! {
    /// Idempotence law: sorting twice equals sorting once
    #[test]
    fn prop_sort_idempotent_law(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let once = values.pipe(sort());
        let twice = once.clone().pipe(sort());
        prop_assert_eq!(once, twice);
    }

    /// Permutation law: the output is ordered and holds the same multiset
    #[test]
    fn prop_sort_permutation_law(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let sorted = values.clone().pipe(sort_by_less(|left: &i16, right: &i16| left < right));

        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// Sorting a deque by key orders it by that key
    #[test]
    fn prop_sort_by_key_orders_deque(values in prop::collection::vec_deque(any::<(u8, u8)>(), 0..64)) {
        let sorted = values.pipe(sort_by_key(|pair: &(u8, u8)| pair.1));
        let keys: Vec<u8> = sorted.iter().map(|pair| pair.1).collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

// =============================================================================
// reduce
// =============================================================================

proptest! {
    /// Left-fold law: reduce matches a left fold seeded with the first element
    #[test]
    fn prop_reduce_left_fold_law(values in prop::collection::vec(any::<i32>(), 1..64)) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        let reduced = values.clone().pipe(reduce(subtract));
        let expected = values[1..].iter().fold(values[0], |accumulator, value| subtract(accumulator, *value));
        prop_assert_eq!(reduced, expected);
    }

    /// Reduce and reduce_first agree on non-empty input
    #[test]
    fn prop_reduce_first_agrees_on_non_empty(values in prop::collection::vec(any::<i64>(), 1..64)) {
        let add = |left: i64, right: i64| left.wrapping_add(right);
        prop_assert_eq!(values.clone().pipe(reduce_first(add)), Ok(values.pipe(reduce(add))));
    }

    /// Fold law: fold with init equals reduce over [init] ++ values
    #[test]
    fn prop_fold_matches_prefixed_reduce(init in any::<i32>(), values in prop::collection::vec(any::<i32>(), 0..64)) {
        let add = |left: i32, right: i32| left.wrapping_add(right);
        let folded = values.clone().pipe(fold(init, add));

        let mut prefixed = vec![init];
        prefixed.extend(values);
        prop_assert_eq!(folded, prefixed.pipe(reduce(add)));
    }
}

#[test]
fn test_reduce_empty_is_default() {
    assert_eq!(Vec::<i32>::new().pipe(reduce(plus)), 0);
    assert_eq!(Vec::<i32>::new().pipe(reduce_first(plus)), Err(PipeError::EmptyReduction));
}

// =============================================================================
// for_each
// =============================================================================

proptest! {
    /// Observation law: f sees every element once in order; the input passes through
    #[test]
    fn prop_for_each_observes_in_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let seen = RefCell::new(Vec::with_capacity(values.len()));
        let passed = values.clone().pipe(for_each(|value: &i32| seen.borrow_mut().push(*value)));

        prop_assert_eq!(&passed, &values);
        prop_assert_eq!(seen.into_inner(), values);
    }

    /// Entries of a map are each observed once
    #[test]
    fn prop_for_each_entry_counts(entries in prop::collection::btree_map(any::<i8>(), any::<u8>(), 0..32)) {
        let count = RefCell::new(0_usize);
        let passed: BTreeMap<i8, u8> = entries.clone().pipe(for_each_entry(|_: &i8, _: &u8| *count.borrow_mut() += 1));

        prop_assert_eq!(count.into_inner(), entries.len());
        prop_assert_eq!(passed, entries);
    }
}

// =============================================================================
// range and composition
// =============================================================================

proptest! {
    /// Range law: end - begin elements when begin < end, none otherwise
    #[test]
    fn prop_range_length_law(begin in -100_i32..100, end in -100_i32..100) {
        let values = range(begin, end);
        let expected = usize::try_from(end - begin).unwrap_or(0);
        prop_assert_eq!(values.len(), expected);
        prop_assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    /// Composition law: sequential pipes equal one composed stage
    #[test]
    fn prop_and_then_matches_sequential_pipes(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let first = filter(is_even);
        let second = map(|value: i32| value / 2);

        let sequential = values.clone().pipe(&first).pipe(&second);
        let composed = values.pipe((&first).and_then(&second));

        prop_assert_eq!(sequential, composed);
    }
}

#[test]
fn test_range_through_deque_matches_vec() {
    let deque: VecDeque<i32> = range_into(-3, 3);
    assert!(deque.into_iter().eq(range(-3, 3)));
}
