//! Hash table error definitions

use crate::chain::{ChainError, RESERVED_KEY};
use std::error::Error;
use std::fmt;

/// Hash table error types
///
/// Represents every way an insert, lookup or removal can fail. Absence of a
/// key and use of the reserved marker are kept apart so callers can tell a
/// programming error from a negative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The reserved marker was used as a key
    ReservedKeyRejected(String),
    /// Memory for a node, key or bucket array could not be obtained
    AllocationFailure,
    /// Key is not present in the table
    NotFound(String),
    /// A table needs at least one bucket
    InvalidTableSize(usize),
    /// Bucket index past the end of the table
    BucketOutOfRange(usize),
    /// A chain refused a node handle as not live
    InvalidNodeHandle,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ReservedKeyRejected(key) => {
                write!(f, "Cannot use reserved value as a key: {}", key)
            }
            TableError::AllocationFailure => write!(f, "Failed to allocate memory"),
            TableError::NotFound(key) => write!(f, "There is no entry containing: {}", key),
            TableError::InvalidTableSize(size) => write!(f, "Invalid table size: {}", size),
            TableError::BucketOutOfRange(index) => write!(f, "Bucket out of range: {}", index),
            TableError::InvalidNodeHandle => write!(f, "Could not remove entry"),
        }
    }
}

impl Error for TableError {}

impl From<ChainError> for TableError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::ReservedKey => TableError::ReservedKeyRejected(RESERVED_KEY.to_string()),
            ChainError::AllocationFailure => TableError::AllocationFailure,
            ChainError::InvalidNodeHandle => TableError::InvalidNodeHandle,
        }
    }
}

/// Result type for hash table operations
pub type TableResult<T> = Result<T, TableError>;
