//! Trie error definitions

use std::error::Error;
use std::fmt;

/// Trie error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Words may only contain ASCII letters
    InvalidCharacter(char),
    /// Word is not stored in the trie
    NotFound(String),
    /// Memory for a new node could not be obtained
    AllocationFailure,
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidCharacter(c) => {
                write!(f, "Invalid character {:?}, only alphabetic characters are allowed", c)
            }
            TrieError::NotFound(word) => write!(f, "Can't find {} in trie", word),
            TrieError::AllocationFailure => write!(f, "Failed to allocate memory for a new trie node"),
        }
    }
}

impl Error for TrieError {}

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;
