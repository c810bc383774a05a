// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Puka Cuckoo Hash: a fixed-capacity cuckoo hash set with an overflow stash and undo.
//!
//! Every key has `k` candidate slots, one per function of a [`HashFamily`]. Inserting a key
//! whose candidates are all taken evicts a resident key, which then looks for a place of
//! its own, and so on. Displacement is fully deterministic, detects cycles, and falls back
//! to a small overflow list, so an insert never fails once the table has room and the key
//! is new.
//!
//! # Features
//!
//! - Deterministic eviction order, reproducible across runs
//! - Cycle detection scoped to a single insertion
//! - Overflow stash that guarantees termination
//! - Insertion undo: every insert is recorded as a group of reversible writes
//! - Pluggable hash families; a seeded FNV family is provided
//!
//! # Example
//!
//! ```
//! use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{PukaCuckooHash, PukaCuckooHashConfig};
//!
//! let config = PukaCuckooHashConfig::new().with_initial_capacity(100);
//! let mut table = PukaCuckooHash::with_config(config);
//! assert_eq!(table.capacity(), 101);
//!
//! assert!(table.insert("hello"));
//! assert!(table.find("hello"));
//!
//! // Duplicates are rejected
//! assert!(!table.insert("hello"));
//!
//! // The last insertion can be reverted
//! assert!(table.insert("world"));
//! table.undo();
//! assert!(!table.find("world"));
//! assert_eq!(table.size(), 1);
//! ```
//!
//! # Custom hash families
//!
//! ```
//! use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{HashFamily, PukaCuckooHash};
//!
//! struct LengthHash;
//!
//! impl HashFamily for LengthHash {
//!     fn hash(&self, key: &str, index: usize) -> i64 {
//!         (key.len() * (index + 1)) as i64
//!     }
//!
//!     fn number_of_functions(&self) -> usize {
//!         2
//!     }
//! }
//!
//! let mut table = PukaCuckooHash::with_hash_family(LengthHash, 7);
//! assert!(table.insert("ab"));
//! assert!(table.insert("cd"));
//! assert_eq!(table.slot(2), Some("ab"));
//! assert_eq!(table.slot(4), Some("cd"));
//! ```

// Module declarations
mod config;
mod error;
mod eviction;
mod hash;
mod prime;
mod storage;
mod table;
mod undo;

// Re-exports
pub use config::{PukaCuckooHashConfig, DEFAULT_TABLE_SIZE};
pub use error::{PukaCuckooHashError, Result};
pub use eviction::Placement;
pub use hash::{hash_with_seed, normalize, HashFamily, SeededHashFamily, MAX_HASH_FUNCTIONS};
pub use prime::{is_prime, next_prime};
pub use table::{Location, PukaCuckooHash};
pub use undo::{InsertionGroup, Mutation, UndoLog};

#[cfg(test)]
pub(crate) use hash::MockHashFamily;
