//! [`Sequence`], [`Rebind`] and [`Positional`] for the standard collections.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::{Positional, Rebind, Sequence};

// =============================================================================
// Vec<T>
// =============================================================================

impl<T> Sequence for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        self.push(element);
    }
}

impl<T, B> Rebind<B> for Vec<T> {
    type Output = Vec<B>;
}

impl<T> Positional for Vec<T> {
    fn sort_unstable_with<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_unstable_by(compare);
        self
    }
}

// =============================================================================
// VecDeque<T>
// =============================================================================

impl<T> Sequence for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }
}

impl<T, B> Rebind<B> for VecDeque<T> {
    type Output = VecDeque<B>;
}

impl<T> Positional for VecDeque<T> {
    fn sort_unstable_with<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.make_contiguous().sort_unstable_by(compare);
        self
    }
}

// =============================================================================
// LinkedList<T>
// =============================================================================

impl<T> Sequence for LinkedList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    /// Linked lists allocate per node; the hint is ignored.
    #[inline]
    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }
}

impl<T, B> Rebind<B> for LinkedList<T> {
    type Output = LinkedList<B>;
}

impl<T> Positional for LinkedList<T> {
    fn sort_unstable_with<F>(self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut working: Vec<T> = self.into_iter().collect();
        working.sort_unstable_by(compare);
        working.into_iter().collect()
    }
}

// =============================================================================
// HashMap<K, V, H>
// =============================================================================

impl<K, V, H> Sequence for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }

    #[inline]
    fn push_back(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V, H, K2, V2> Rebind<(K2, V2)> for HashMap<K, V, H>
where
    K: Eq + Hash,
    K2: Eq + Hash,
    H: BuildHasher + Default,
{
    type Output = HashMap<K2, V2, H>;
}

// =============================================================================
// BTreeMap<K, V>
// =============================================================================

impl<K: Ord, V> Sequence for BTreeMap<K, V> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    /// B-trees allocate per node; the hint is ignored.
    #[inline]
    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline]
    fn push_back(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord, V, K2: Ord, V2> Rebind<(K2, V2)> for BTreeMap<K, V> {
    type Output = BTreeMap<K2, V2>;
}

// =============================================================================
// HashSet<T, H>
// =============================================================================

impl<T, H> Sequence for HashSet<T, H>
where
    T: Eq + Hash,
    H: BuildHasher + Default,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T, H, B> Rebind<B> for HashSet<T, H>
where
    T: Eq + Hash,
    B: Eq + Hash,
    H: BuildHasher + Default,
{
    type Output = HashSet<B, H>;
}

// =============================================================================
// BTreeSet<T>
// =============================================================================

impl<T: Ord> Sequence for BTreeSet<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord, B: Ord> Rebind<B> for BTreeSet<T> {
    type Output = BTreeSet<B>;
}
