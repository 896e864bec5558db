//! Table module: a fixed-size string hash table
//!
//! This module implements the bucketed hash table with the following features:
//! - A fixed number of buckets chosen at construction
//! - One [`Chain`](crate::chain::Chain) per bucket, newest key first
//! - Rejection of the reserved marker on every keyed operation

pub mod error;
pub mod string_table;

pub use error::{TableError, TableResult};
pub use string_table::{DEFAULT_TABLE_SIZE, Lookup, StringTable, StringTableBuilder};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
