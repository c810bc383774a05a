//! Table configuration module.
//!
//! Settings for the cuckoo hash table that the command runner operates on.

use super::{ConfigResult, Validate};
use crate::data_structures::puka_cuckoo_hash::{
    PukaCuckooHashConfig, DEFAULT_TABLE_SIZE, MAX_HASH_FUNCTIONS,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Table configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Requested number of slots (rounded up to the next odd prime)
    pub capacity: usize,

    /// Number of hash functions per key
    pub hash_functions: usize,

    /// Seed for the hash family
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TABLE_SIZE,
            hash_functions: 2,
            seed: 0,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "capacity must be greater than 0".to_string(),
            ));
        }

        if !(1..=MAX_HASH_FUNCTIONS).contains(&self.hash_functions) {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.hash_functions".to_string(),
                message: format!("must be between 1 and {MAX_HASH_FUNCTIONS}"),
            });
        }

        Ok(())
    }
}

impl From<&TableConfig> for PukaCuckooHashConfig {
    fn from(config: &TableConfig) -> Self {
        PukaCuckooHashConfig::new()
            .with_initial_capacity(config.capacity)
            .with_hash_function_count(config.hash_functions)
            .with_seed(config.seed)
    }
}
