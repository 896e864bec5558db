//! FIFO queue on top of a chain

use crate::chain::{Chain, ChainResult, Reserved};
use std::fmt;

/// First-in first-out queue; enqueue and dequeue are O(1)
#[derive(Debug)]
pub struct Queue<T> {
    chain: Chain<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Queue { chain: Chain::new() }
    }

    /// Remove and return the value that has waited longest
    pub fn dequeue(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Values from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chain.iter()
    }
}

impl<T: Reserved> Queue<T> {
    /// Append `value` at the back; the reserved marker is refused
    pub fn enqueue(&mut self, value: T) -> ChainResult<()> {
        self.chain.push_back(value).map(|_| ())
    }
}

/// Front to back, or `Empty queue.`
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty queue.");
        }
        write!(f, "{}", self.chain)
    }
}
