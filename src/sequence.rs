//! The container capabilities merge-insertion sort is written against.

use std::collections::VecDeque;

/// Ordered, index addressable container that supports insertion at arbitrary positions.
///
/// Consuming the container through [`IntoIterator`] must yield the elements front to back.
pub trait Sequence: Default + IntoIterator {
    /// The same kind of container holding elements of type `U`. Lets the engine keep its
    /// scratch chains in the container the caller picked.
    type Rebind<U>: Sequence<Item = U>;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_back(&mut self, value: Self::Item);

    fn pop_back(&mut self) -> Option<Self::Item>;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Inserts `value` at `index`, shifting everything after it one position back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: Self::Item);

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let items = items.into_iter();
        let mut seq = Self::with_capacity(items.size_hint().0);
        for item in items {
            seq.push_back(item);
        }

        seq
    }
}

impl<T> Sequence for Vec<T> {
    type Rebind<U> = Vec<U>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Rebind<U> = VecDeque<U>;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }
}
