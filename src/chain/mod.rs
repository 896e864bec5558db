//! Bucket chain: a doubly linked list stored in an index-based node pool
//!
//! Nodes live in a slot vector owned by the chain and link to each other by
//! slot index. An empty chain is simply one without a head, so no placeholder
//! node is ever stored. Released slots are threaded onto a free list and
//! reused; every slot carries a generation counter that is bumped on release,
//! which makes a [`NodeId`] to a removed node permanently invalid.

use std::borrow::Borrow;
use std::fmt;
use tracing::warn;

pub mod error;
pub use error::{ChainError, ChainResult};

/// The reserved marker for string keys
pub const RESERVED_KEY: &str = "SENTINEL";

/// The reserved marker for integer values
pub const RESERVED_INT: i32 = i32::MAX;

/// Values that have one reserved marker which may never be stored.
///
/// This is the only place a marker comparison happens.
pub trait Reserved {
    fn is_reserved(&self) -> bool;
}

impl Reserved for str {
    fn is_reserved(&self) -> bool {
        self == RESERVED_KEY
    }
}

impl Reserved for String {
    fn is_reserved(&self) -> bool {
        self.as_str().is_reserved()
    }
}

impl Reserved for i32 {
    fn is_reserved(&self) -> bool {
        *self == RESERVED_INT
    }
}

/// Handle to a node inside a [`Chain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(Node<T>),
    /// Next free slot
    Vacant(Option<usize>),
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Doubly linked chain of values
#[derive(Debug)]
pub struct Chain<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    /// Create a new empty chain
    pub const fn new() -> Self {
        Chain {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of values in the chain
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value behind `id`, if the handle is still live
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(node),
            }) if *generation == id.generation => Some(&node.value),
            _ => None,
        }
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Unlink `id` in O(1) and hand back its value.
    ///
    /// Fails with [`ChainError::InvalidNodeHandle`] when the handle was
    /// already removed, came from another chain's slot that is vacant here,
    /// or is out of range.
    pub fn remove(&mut self, id: NodeId) -> ChainResult<T> {
        if !self.contains_node(id) {
            warn!(index = id.index, generation = id.generation, "rejected stale node handle");
            return Err(ChainError::InvalidNodeHandle);
        }

        Ok(self.unlink(id.index))
    }

    /// Remove the head value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|index| self.unlink(index))
    }

    /// Remove the tail value
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|index| self.unlink(index))
    }

    /// Drop every value, keeping the slot storage for reuse.
    ///
    /// Handles taken before the call are invalidated.
    pub fn clear(&mut self) {
        let mut free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.entry, Entry::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant(free_head);
            free_head = Some(index);
        }

        self.free_head = free_head;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Release every node and the chain itself
    pub fn destroy(self) {
        // Nodes sit in one vector, dropping it never recurses along the links
        drop(self);
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index].entry {
            Entry::Occupied(node) => node,
            // Only occupied slots are ever reachable through links
            Entry::Vacant(_) => unreachable!("linked slot {} is vacant", index),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index].entry {
            Entry::Occupied(node) => node,
            Entry::Vacant(_) => unreachable!("linked slot {} is vacant", index),
        }
    }

    fn id_of(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Place `value` into a free slot, growing the pool if needed
    fn allocate(&mut self, value: T) -> ChainResult<usize> {
        let node = Node {
            value,
            prev: None,
            next: None,
        };

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index];
            if let Entry::Vacant(next_free) = slot.entry {
                self.free_head = next_free;
            }
            slot.entry = Entry::Occupied(node);
            return Ok(index);
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| ChainError::AllocationFailure)?;
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(node),
        });

        Ok(self.slots.len() - 1)
    }

    fn link_front(&mut self, index: usize) {
        let old_head = self.head;
        self.node_mut(index).next = old_head;

        match old_head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }

        self.head = Some(index);
        self.len += 1;
    }

    fn link_back(&mut self, index: usize) {
        let old_tail = self.tail;
        self.node_mut(index).prev = old_tail;

        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
        self.len += 1;
    }

    /// Detach the occupied slot `index` and return it to the free list
    fn unlink(&mut self, index: usize) -> T {
        let free_head = self.free_head;
        let slot = &mut self.slots[index];
        let node = match std::mem::replace(&mut slot.entry, Entry::Vacant(free_head)) {
            Entry::Occupied(node) => node,
            Entry::Vacant(_) => unreachable!("unlinking vacant slot {}", index),
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }
}

impl<T: Reserved> Chain<T> {
    /// Link `value` in front of the current head (newest-first order)
    pub fn push_front(&mut self, value: T) -> ChainResult<NodeId> {
        Self::check_reserved(&value, "insert")?;

        let index = self.allocate(value)?;
        self.link_front(index);
        Ok(self.id_of(index))
    }

    /// Link `value` after the current tail
    pub fn push_back(&mut self, value: T) -> ChainResult<NodeId> {
        Self::check_reserved(&value, "insert")?;

        let index = self.allocate(value)?;
        self.link_back(index);
        Ok(self.id_of(index))
    }

    /// Alias of [`Chain::push_front`], the insertion used by hash buckets
    pub fn insert(&mut self, value: T) -> ChainResult<NodeId> {
        self.push_front(value)
    }

    /// First node, walking from the head, whose value equals `key`
    pub fn find<Q>(&self, key: &Q) -> ChainResult<Option<NodeId>>
    where
        T: Borrow<Q>,
        Q: Reserved + Eq + ?Sized,
    {
        Self::check_reserved(key, "find")?;

        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            let stored: &Q = node.value.borrow();
            if stored == key {
                return Ok(Some(self.id_of(index)));
            }
            cursor = node.next;
        }

        Ok(None)
    }

    fn check_reserved<Q: Reserved + ?Sized>(key: &Q, operation: &'static str) -> ChainResult<()> {
        if key.is_reserved() {
            warn!(operation, "rejected reserved marker");
            return Err(ChainError::ReservedKey);
        }
        Ok(())
    }
}

/// Space separated values from head to tail, or `Empty list.`
impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty list.");
        }

        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Borrowing iterator over a [`Chain`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.chain.node(index);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The doubly linked integer list exercise
pub type IntList = Chain<i32>;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
