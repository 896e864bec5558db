// String hash functions used to place keys into buckets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// djb2 hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn djb2_hash(s: &str) -> u64 {
    // djb2 constants
    const DJB2_MAGIC_NUMBER: u64 = 5381;

    let mut hash = DJB2_MAGIC_NUMBER;

    for byte in s.as_bytes() {
        // Overflow wraps, it is part of the function
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(*byte as u64); // hash * 33 + c
    }

    hash
}

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> u64 {
    // FNV-1a constants
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET_BASIS;

    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// XXH64 with a fixed zero seed
pub fn xxh64_hash(s: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC32 widened to 64 bits
pub fn crc32_hash(s: &str) -> u64 {
    crc32fast::hash(s.as_bytes()) as u64
}

/// Hash a string and return an integer
/// Uses djb2 as the default hash algorithm
pub fn hash_string(s: &str) -> u64 {
    djb2_hash(s)
}

/// Selectable bucket hash algorithm.
///
/// Every algorithm is deterministic and unseeded, so a key always maps to the
/// same bucket for the lifetime of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Djb2,
    Fnv1a,
    Xxh64,
    Crc32,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Djb2,
        HashAlgorithm::Fnv1a,
        HashAlgorithm::Xxh64,
        HashAlgorithm::Crc32,
    ];

    /// Hash `s` with this algorithm
    pub fn hash(self, s: &str) -> u64 {
        match self {
            HashAlgorithm::Djb2 => djb2_hash(s),
            HashAlgorithm::Fnv1a => fnv1a_hash(s),
            HashAlgorithm::Xxh64 => xxh64_hash(s),
            HashAlgorithm::Crc32 => crc32_hash(s),
        }
    }

    /// Reduce the hash of `s` to a bucket index in `0..bucket_count`.
    ///
    /// `bucket_count` must be non-zero.
    pub fn bucket(self, s: &str, bucket_count: usize) -> usize {
        (self.hash(s) % bucket_count as u64) as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Djb2 => "djb2",
            HashAlgorithm::Fnv1a => "fnv1a",
            HashAlgorithm::Xxh64 => "xxh64",
            HashAlgorithm::Crc32 => "crc32",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown hash algorithm: {}", s))
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
