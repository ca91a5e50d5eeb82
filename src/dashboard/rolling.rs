//! Bounded FIFO of recent metric values.

#[cfg(test)]
#[path = "rolling_test.rs"]
mod rolling_test;

use std::collections::VecDeque;

/// Fixed-capacity buffer that evicts its oldest value on overflow.
#[derive(Clone, Debug, PartialEq)]
pub struct RollingBuffer<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingBuffer<T> {
    /// A zero capacity is bumped to one so a push is always retained.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { values: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `value`, returning the evicted oldest value if the buffer was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.values.back()
    }
}

impl<T: Clone> RollingBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }
}
