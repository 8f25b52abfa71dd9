use alloc::vec;
use alloc::vec::Vec;

/// Fixed-capacity FIFO of recent samples
///
/// Circular buffer allocated once at creation. Pushing into a full window
/// overwrites the oldest sample. RAM cost: capacity * 8 bytes.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    buffer: Vec<f64>,
    head: usize,
    len: usize,
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` samples
    ///
    /// capacity must be > 0
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "window capacity must be > 0");

        Self {
            buffer: vec![0.0; capacity.max(1)],
            head: 0,
            len: 0,
        }
    }

    /// Append a sample, evicting the oldest one if the window is full
    pub fn push(&mut self, value: f64) {
        let capacity = self.buffer.len();

        if self.len < capacity {
            self.buffer[(self.head + self.len) % capacity] = value;
            self.len += 1;
        } else {
            // Full: the slot under head holds the oldest sample
            self.buffer[self.head] = value;
            self.head = (self.head + 1) % capacity;
        }
    }

    /// Sample `offset` positions newer than the oldest one
    pub fn get(&self, offset: usize) -> Option<f64> {
        if offset >= self.len {
            return None;
        }
        Some(self.buffer[(self.head + offset) % self.buffer.len()])
    }

    /// Oldest sample
    pub fn front(&self) -> Option<f64> {
        self.get(0)
    }

    /// Newest sample
    pub fn back(&self) -> Option<f64> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).filter_map(move |offset| self.get(offset))
    }
}
