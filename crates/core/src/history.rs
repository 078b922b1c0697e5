//! Bounded FIFO history of accepted readings.

use std::collections::VecDeque;

use crate::reading::Reading;

/// Capacity-limited, append-only sequence of readings in acceptance
/// order. When full, the oldest readings are evicted first, so the
/// buffer always holds the most recent `capacity` accepted readings.
#[derive(Debug)]
pub struct HistoryBuffer {
    buf: VecDeque<Reading>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create a buffer holding at most `capacity` readings (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Append a reading, evicting from the front if at capacity.
    pub fn append(&mut self, reading: Reading) {
        while self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Most recent reading, if any.
    pub fn latest(&self) -> Option<&Reading> {
        self.buf.back()
    }

    /// Defensive copy of the buffer contents, oldest first. Callers may
    /// iterate freely while appends continue on the live buffer.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.buf.iter().cloned().collect()
    }

    /// Reset to empty. Does not touch any external counters; those live
    /// in the store.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
