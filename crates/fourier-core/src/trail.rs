//! Bounded FIFO history used for fading trails and scrolling wave traces.
//!
//! Purely derived render state: drivers clear it whenever time resets or the
//! input changes, and otherwise push one entry per frame.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct Trail<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Append `item` as the newest entry, evicting the oldest ones past capacity.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.evict();
    }

    /// Change the capacity; shrinking evicts the oldest entries right away.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    fn evict(&mut self) {
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }
}

impl<T> Default for Trail<T> {
    /// Zero capacity; call [`Trail::set_capacity`] before use.
    fn default() -> Self {
        Self::new(0)
    }
}
