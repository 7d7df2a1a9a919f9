//! Fixed-capacity sliding window

use std::collections::VecDeque;

/// The most recent `capacity` samples of a channel
///
/// The window always holds exactly `capacity` values. Positions that no
/// sample has reached yet are zero, on the left.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<f32>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create a zero-filled window
    pub fn new(capacity: usize) -> Self {
        Self {
            values: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        }
    }

    /// Push a sample, evicting the oldest value
    pub fn push(&mut self, sample: f32) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(sample);
    }

    /// Change the capacity
    ///
    /// The most recent `min(old, new)` values are kept as the suffix and the
    /// window is left-padded with zeros up to `new_capacity`.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.values.len() {
            let excess = self.values.len() - new_capacity;
            self.values.drain(..excess);
        } else {
            let missing = new_capacity - self.values.len();
            self.values.reserve(missing);
            for _ in 0..missing {
                self.values.push_front(0.0);
            }
        }
        self.values.shrink_to(new_capacity);
        self.capacity = new_capacity;
    }

    /// Window capacity (W)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values held, always equal to the capacity
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window has zero capacity
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent value
    pub fn last(&self) -> Option<f32> {
        self.values.back().copied()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// Copy the window out, oldest first
    pub fn to_vec(&self) -> Vec<f32> {
        self.values.iter().copied().collect()
    }
}
