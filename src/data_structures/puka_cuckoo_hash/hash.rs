// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash families consumed by the Puka Cuckoo Hash table.
//!
//! The table does not care how hashes are produced. It only needs, for a key and a
//! function index `i` in `[0, k)`, some integer, plus the count `k`. Raw hashes may be
//! negative or far larger than the table; [`normalize`] folds them into a slot index.

use std::hash::Hasher;

use fnv::FnvHasher;

/// Seeds for the built-in hash functions.
/// These constants are mixed with the configured seed, one per function.
#[allow(clippy::unreadable_literal)]
const HASH_SEEDS: [u64; 8] = [
    0x517cc1b727220a95, 0x83588256c732eb1f, 0xabe33b1c9b32d199, 0x4cf18d443988208f,
    0xd5c5778faf2a1ef1, 0xa22d34e45c79d3b5, 0xb3e52f89793f0af5, 0x9d1d10f8dd66cbcb,
];

/// Maximum number of functions the built-in family provides.
pub const MAX_HASH_FUNCTIONS: usize = HASH_SEEDS.len();

/// A family of `k` hash functions over text keys.
///
/// Implementations must return the same value for the same `(key, index)` pair for the
/// lifetime of a table and must report at least one function. The table does not
/// check either property.
#[cfg_attr(test, mockall::automock)]
pub trait HashFamily {
    /// Hashes `key` with the function at `index`, where `index < number_of_functions()`.
    fn hash(&self, key: &str, index: usize) -> i64;

    /// Number of hash functions in the family.
    fn number_of_functions(&self) -> usize;
}

/// Folds a raw hash into `[0, capacity)`.
///
/// Negative remainders are shifted up by `capacity`.
pub fn normalize(hash: i64, capacity: usize) -> usize {
    let capacity = capacity as i64;
    let mut pos = hash % capacity;
    if pos < 0 {
        pos += capacity;
    }
    pos as usize
}

/// Computes an FNV-1a hash of `key` prefixed with `seed`.
///
/// # Arguments
///
/// * `key` - The key to hash.
/// * `seed` - The seed mixed in before the key bytes.
///
/// # Returns
///
/// The computed hash value.
pub fn hash_with_seed(key: &str, seed: u64) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write_u64(seed);
    hasher.write(key.as_bytes());
    hasher.finish()
}

/// The default hash family: seeded FNV-1a, one seed per function.
///
/// Output is stable across runs and platforms, so tables built from the same
/// configuration place keys identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededHashFamily {
    seeds: Vec<u64>,
}

impl SeededHashFamily {
    /// Creates a family of `function_count` functions derived from `seed`.
    ///
    /// The count is clamped to `1..=MAX_HASH_FUNCTIONS`.
    pub fn new(function_count: usize, seed: u64) -> Self {
        let function_count = function_count.clamp(1, MAX_HASH_FUNCTIONS);
        let seeds = HASH_SEEDS[..function_count]
            .iter()
            .map(|base| base ^ seed)
            .collect();
        Self { seeds }
    }
}

impl Default for SeededHashFamily {
    fn default() -> Self {
        Self::new(2, 0)
    }
}

impl HashFamily for SeededHashFamily {
    fn hash(&self, key: &str, index: usize) -> i64 {
        hash_with_seed(key, self.seeds[index]) as i64
    }

    fn number_of_functions(&self) -> usize {
        self.seeds.len()
    }
}
