//! Chain error definitions

use std::error::Error;
use std::fmt;

/// Chain error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The reserved marker value was used as a key
    ReservedKey,
    /// Memory for a new node could not be obtained
    AllocationFailure,
    /// The handle does not name a live node of this chain
    InvalidNodeHandle,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::ReservedKey => write!(f, "Reserved marker value cannot be used as a key"),
            ChainError::AllocationFailure => write!(f, "Failed to allocate memory for a new node"),
            ChainError::InvalidNodeHandle => write!(f, "Node handle is not linked into this chain"),
        }
    }
}

impl Error for ChainError {}

/// Result type for chain operations
pub type ChainResult<T> = Result<T, ChainError>;
