//! Chainkit: classic linked data structures
//!
//! The centrepiece is [`table::StringTable`], a fixed-size hash table whose
//! buckets are [`chain::Chain`]s. The same chain backs the integer list, the
//! stack and the queue; the trie stands on its own.

// Hashing and locking
pub mod infrastructure;

// Data structures
pub mod chain;
pub mod linked;
pub mod table;
pub mod trie;

// Interactive driver
pub mod config;
pub mod shell;

// Re-export the main types for easier access
pub use chain::{Chain, IntList, NodeId, RESERVED_INT, RESERVED_KEY};
pub use table::{StringTable, TableError};
