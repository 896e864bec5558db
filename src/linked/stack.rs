//! LIFO stack on top of a chain

use crate::chain::{Chain, ChainResult, Reserved};
use std::fmt;

/// Last-in first-out stack; push and pop are O(1)
#[derive(Debug)]
pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Stack { chain: Chain::new() }
    }

    /// Remove and return the most recently pushed value
    pub fn pop(&mut self) -> Option<T> {
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

    /// Values from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.chain.iter()
    }
}

impl<T: Reserved> Stack<T> {
    /// Push `value` on top; the reserved marker is refused
    pub fn push(&mut self, value: T) -> ChainResult<()> {
        self.chain.push_front(value).map(|_| ())
    }
}

/// Top to bottom, or `Empty stack.`
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty stack.");
        }
        write!(f, "{}", self.chain)
    }
}
