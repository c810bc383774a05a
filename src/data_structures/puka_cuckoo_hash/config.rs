// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Puka Cuckoo Hash table.

use crate::data_structures::puka_cuckoo_hash::hash::{SeededHashFamily, MAX_HASH_FUNCTIONS};

/// Requested size used when no capacity is given.
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// Configuration for a Puka Cuckoo Hash table built on the seeded hash family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PukaCuckooHashConfig {
    /// Requested number of slots.
    /// The actual capacity is the next odd prime at or above this value.
    pub initial_capacity: usize,

    /// Number of hash functions (probe positions per key).
    pub hash_function_count: usize,

    /// Seed mixed into every hash function.
    pub seed: u64,
}

impl PukaCuckooHashConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `PukaCuckooHashConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested capacity of the hash table.
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - The requested number of slots.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the number of hash functions to use.
    ///
    /// # Arguments
    ///
    /// * `hash_function_count` - The number of hash functions (1 to 8).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_hash_function_count(mut self, hash_function_count: usize) -> Self {
        self.hash_function_count = hash_function_count.clamp(1, MAX_HASH_FUNCTIONS);
        self
    }

    /// Sets the seed for the hash family.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the seeded hash family described by this configuration.
    pub fn hash_family(&self) -> SeededHashFamily {
        SeededHashFamily::new(self.hash_function_count, self.seed)
    }
}

impl Default for PukaCuckooHashConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TABLE_SIZE,
            hash_function_count: 2, // Standard cuckoo hashing uses 2 hash functions
            seed: 0,
        }
    }
}
