//! Stack and queue built from the same chain the hash table buckets use

pub mod queue;
pub mod stack;

pub use crate::chain::IntList;
pub use queue::Queue;
pub use stack::Stack;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
