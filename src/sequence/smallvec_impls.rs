//! `SmallVec` as a pipeline container.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::{Positional, Rebind, Sequence};

impl<T, const N: usize> Sequence for SmallVec<[T; N]> {
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

impl<T, B, const N: usize> Rebind<B> for SmallVec<[T; N]> {
    type Output = SmallVec<[B; N]>;
}

impl<T, const N: usize> Positional for SmallVec<[T; N]> {
    fn sort_unstable_with<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_unstable_by(compare);
        self
    }
}
