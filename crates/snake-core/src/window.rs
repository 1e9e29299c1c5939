// File: crates/snake-core/src/window.rs
// Summary: Fixed-capacity, newest-first sliding buffer.

use std::collections::VecDeque;

/// Newest item at the front; pushing past capacity evicts from the back.
/// Capacity is at least 1.
#[derive(Clone, Debug, PartialEq)]
pub struct SlidingWindow<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> SlidingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, items: VecDeque::with_capacity(capacity) }
    }

    /// Window already holding `capacity` items produced by `fill`.
    pub fn filled(capacity: usize, mut fill: impl FnMut() -> T) -> Self {
        let mut w = Self::new(capacity);
        for _ in 0..w.capacity {
            w.items.push_back(fill());
        }
        w
    }

    /// Prepend `item`; returns the evicted oldest item, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push_front(item);
        if self.items.len() > self.capacity { self.items.pop_back() } else { None }
    }

    pub fn front(&self) -> Option<&T> { self.items.front() }
    pub fn back(&self) -> Option<&T> { self.items.back() }
    pub fn get(&self, index: usize) -> Option<&T> { self.items.get(index) }

    /// Newest to oldest.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn is_full(&self) -> bool { self.items.len() == self.capacity }
    pub fn capacity(&self) -> usize { self.capacity }

    pub fn clear(&mut self) { self.items.clear(); }
}

impl<'a, T> IntoIterator for &'a SlidingWindow<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
