//! Runtime settings for the interactive driver
//!
//! Settings come from built-in defaults, then an optional JSON file, then
//! command-line flags, each layer overriding the previous one. A file only
//! needs the fields it changes:
//!
//! ```json
//! { "table_size": 11, "hash": "fnv1a" }
//! ```

use crate::infrastructure::hash::HashAlgorithm;
use crate::table::{DEFAULT_TABLE_SIZE, StringTable, StringTableBuilder, TableResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod error;
pub use error::{ConfigError, ConfigResult};

/// Longest token accepted from input, as read by `%79s`
pub const DEFAULT_MAX_KEY_LEN: usize = 79;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bucket count of the hash table
    pub table_size: usize,
    /// Bucket hash algorithm
    pub hash: HashAlgorithm,
    /// Longest key or word the driver accepts
    pub max_key_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            hash: HashAlgorithm::default(),
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }
}

impl Config {
    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        table_size: Option<usize>,
        hash: Option<HashAlgorithm>,
        max_key_len: Option<usize>,
    ) -> ConfigResult<Self> {
        if let Some(table_size) = table_size {
            self.table_size = table_size;
        }
        if let Some(hash) = hash {
            self.hash = hash;
        }
        if let Some(max_key_len) = max_key_len {
            self.max_key_len = max_key_len;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.table_size == 0 {
            return Err(ConfigError::InvalidValue(
                "table_size must be at least 1".to_string(),
            ));
        }
        if self.max_key_len == 0 {
            return Err(ConfigError::InvalidValue(
                "max_key_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an empty table with these settings
    pub fn build_table(&self) -> TableResult<StringTable> {
        StringTableBuilder::new()
            .size(self.table_size)
            .hash(self.hash)
            .try_build()
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
