//! Fixed-size string hash table with separate chaining

use crate::chain::{Chain, NodeId, Reserved};
use crate::infrastructure::hash::HashAlgorithm;
use crate::table::error::{TableError, TableResult};
use std::fmt;
use tracing::{debug, warn};

/// Number of buckets used when none is configured
pub const DEFAULT_TABLE_SIZE: usize = 5;

/// A key found in the table together with the bucket holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Bucket index the key hashed to
    pub bucket: usize,
    /// The stored copy of the key
    pub key: &'a str,
}

/// Hash table of owned string keys
///
/// The bucket count is fixed when the table is built and never changes: a
/// lookup costs the length of one chain, which grows with load. Keys are
/// routed with the configured [`HashAlgorithm`] (djb2 by default).
#[derive(Debug)]
pub struct StringTable {
    buckets: Vec<Chain<String>>,
    hash: HashAlgorithm,
    len: usize,
}

impl StringTable {
    /// Create a table with `size` empty buckets using djb2
    pub fn new(size: usize) -> TableResult<Self> {
        Self::with_hash(size, HashAlgorithm::default())
    }

    /// Create a table with `size` empty buckets and the given hash algorithm
    pub fn with_hash(size: usize, hash: HashAlgorithm) -> TableResult<Self> {
        if size == 0 {
            return Err(TableError::InvalidTableSize(size));
        }

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(size)
            .map_err(|_| TableError::AllocationFailure)?;
        buckets.resize_with(size, Chain::new);

        debug!(size, hash = %hash, "created table");

        Ok(Self {
            buckets,
            hash,
            len: 0,
        })
    }

    /// Number of buckets
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored keys across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }

    /// Bucket index `key` maps to
    pub fn bucket_of(&self, key: &str) -> usize {
        self.hash.bucket(key, self.buckets.len())
    }

    /// Copy `key` into the table, at the front of its bucket.
    ///
    /// Returns the bucket index. Inserting a key that is already present
    /// stores a second copy; the newer one shadows the older for lookups.
    pub fn insert(&mut self, key: &str) -> TableResult<usize> {
        Self::check_reserved(key)?;

        let mut owned = String::new();
        owned
            .try_reserve_exact(key.len())
            .map_err(|_| TableError::AllocationFailure)?;
        owned.push_str(key);

        let bucket = self.bucket_of(key);
        self.buckets[bucket].insert(owned)?;
        self.len += 1;

        debug!(bucket, key, "inserted key");
        Ok(bucket)
    }

    /// Look `key` up in its bucket
    pub fn find(&self, key: &str) -> TableResult<Lookup<'_>> {
        let (bucket, node) = self.locate(key)?;
        let stored = self.buckets[bucket]
            .get(node)
            .ok_or_else(|| TableError::NotFound(key.to_string()))?;

        Ok(Lookup {
            bucket,
            key: stored.as_str(),
        })
    }

    /// Whether `key` is stored. The reserved marker is still an error.
    pub fn contains(&self, key: &str) -> TableResult<bool> {
        match self.find(key) {
            Ok(_) => Ok(true),
            Err(TableError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Remove the newest copy of `key` and return it
    pub fn remove(&mut self, key: &str) -> TableResult<String> {
        let (bucket, node) = self.locate(key)?;
        let removed = self.buckets[bucket].remove(node)?;
        self.len -= 1;

        debug!(bucket, key, "removed key");
        Ok(removed)
    }

    /// Chain stored at `index`
    pub fn bucket(&self, index: usize) -> TableResult<&Chain<String>> {
        self.buckets
            .get(index)
            .ok_or(TableError::BucketOutOfRange(index))
    }

    /// Space separated keys of one bucket, newest first, or `Empty list.`
    pub fn print_bucket(&self, index: usize) -> TableResult<String> {
        Ok(self.bucket(index)?.to_string())
    }

    /// Iterate over `(index, chain)` for every bucket
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Chain<String>)> {
        self.buckets.iter().enumerate()
    }

    /// Iterate over every stored key, bucket by bucket
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(String::as_str))
    }

    /// Remove every key, keeping the buckets
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Release every bucket and key
    pub fn destroy(self) {
        debug!(size = self.buckets.len(), len = self.len, "destroying table");
        for chain in self.buckets {
            chain.destroy();
        }
    }

    fn locate(&self, key: &str) -> TableResult<(usize, NodeId)> {
        Self::check_reserved(key)?;

        let bucket = self.bucket_of(key);
        match self.buckets[bucket].find(key)? {
            Some(node) => Ok((bucket, node)),
            None => Err(TableError::NotFound(key.to_string())),
        }
    }

    fn check_reserved(key: &str) -> TableResult<()> {
        if key.is_reserved() {
            warn!(key, "rejected reserved marker as key");
            return Err(TableError::ReservedKeyRejected(key.to_string()));
        }
        Ok(())
    }
}

/// One `<index> = <listing>` line per bucket
impl fmt::Display for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", index, chain)?;
        }
        Ok(())
    }
}

/// Builder for constructing StringTable instances
///
/// # Example
/// ```
/// use chainkit::infrastructure::hash::HashAlgorithm;
/// use chainkit::table::StringTableBuilder;
///
/// let table = StringTableBuilder::new()
///     .size(7)
///     .hash(HashAlgorithm::Fnv1a)
///     .try_build()
///     .unwrap();
/// assert_eq!(table.size(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct StringTableBuilder {
    size: usize,
    hash: HashAlgorithm,
}

impl Default for StringTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self {
            size: DEFAULT_TABLE_SIZE,
            hash: HashAlgorithm::default(),
        }
    }

    /// Set the bucket count
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the hash algorithm
    pub fn hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Build with validation
    pub fn try_build(self) -> TableResult<StringTable> {
        StringTable::with_hash(self.size, self.hash)
    }
}
