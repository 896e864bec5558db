// Shared access to a StringTable from several threads
//
// The table itself has no internal synchronization. SharedTable wraps it in a
// parking_lot RwLock and takes the lock for exactly one table call at a time.

use crate::table::{StringTable, TableResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-protected handle to one [`StringTable`]
#[derive(Debug, Clone)]
pub struct SharedTable {
    inner: Arc<RwLock<StringTable>>,
}

impl SharedTable {
    /// Wrap `table` for shared use
    pub fn new(table: StringTable) -> Self {
        SharedTable {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Insert under the write lock, returning the bucket index
    pub fn insert(&self, key: &str) -> TableResult<usize> {
        self.inner.write().insert(key)
    }

    /// Look `key` up under the read lock, returning its bucket index
    pub fn find(&self, key: &str) -> TableResult<usize> {
        self.inner.read().find(key).map(|found| found.bucket)
    }

    pub fn contains(&self, key: &str) -> TableResult<bool> {
        self.inner.read().contains(key)
    }

    /// Remove under the write lock
    pub fn remove(&self, key: &str) -> TableResult<String> {
        self.inner.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn print_bucket(&self, index: usize) -> TableResult<String> {
        self.inner.read().print_bucket(index)
    }

    /// Render every bucket while holding the read lock once
    pub fn render(&self) -> String {
        self.inner.read().to_string()
    }

    /// Run several operations as one critical section
    pub fn with<R>(&self, f: impl FnOnce(&mut StringTable) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Take the table back once this is the last handle
    pub fn into_inner(self) -> Option<StringTable> {
        Arc::try_unwrap(self.inner).ok().map(RwLock::into_inner)
    }

    /// Drop this handle; the last handle also destroys the table
    pub fn destroy(self) {
        if let Some(table) = self.into_inner() {
            table.destroy();
        }
    }
}
