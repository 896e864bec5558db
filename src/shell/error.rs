//! Shell error definitions

use crate::chain::ChainError;
use crate::table::TableError;
use crate::trie::TrieError;
use std::error::Error;
use std::fmt;

/// Shell error types
///
/// Everything except [`ShellError::Io`] is reported to the user and the
/// session carries on.
#[derive(Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    Io(std::io::Error),
    /// First word of the line is not a command
    UnknownCommand(String),
    /// The command exists but this structure does not support it
    Unsupported(String),
    /// The command needs an argument
    MissingArgument(&'static str),
    /// Argument is not a 32-bit integer
    InvalidNumber(String),
    /// Token longer than the configured maximum
    KeyTooLong { len: usize, max: usize },
    /// Hash table operation failed
    Table(TableError),
    /// List, stack or queue operation failed
    Chain(ChainError),
    /// Trie operation failed
    Trie(TrieError),
}

impl ShellError {
    /// Whether the session has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Io(_))
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Io(err) => write!(f, "I/O error: {}", err),
            ShellError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
            ShellError::Unsupported(cmd) => write!(f, "Command not supported here: {}", cmd),
            ShellError::MissingArgument(what) => write!(f, "Missing argument: {}", what),
            ShellError::InvalidNumber(arg) => write!(f, "Not a number: {}", arg),
            ShellError::KeyTooLong { len, max } => {
                write!(f, "Input is {} characters long, the limit is {}", len, max)
            }
            ShellError::Table(err) => write!(f, "{}", err),
            ShellError::Chain(err) => write!(f, "{}", err),
            ShellError::Trie(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShellError::Io(err) => Some(err),
            ShellError::Table(err) => Some(err),
            ShellError::Chain(err) => Some(err),
            ShellError::Trie(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<TableError> for ShellError {
    fn from(err: TableError) -> Self {
        ShellError::Table(err)
    }
}

impl From<ChainError> for ShellError {
    fn from(err: ChainError) -> Self {
        ShellError::Chain(err)
    }
}

impl From<TrieError> for ShellError {
    fn from(err: TrieError) -> Self {
        ShellError::Trie(err)
    }
}

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
