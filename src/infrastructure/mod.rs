//! Infrastructure shared by the data structures: hashing and locking

pub mod hash;
pub mod lock;
