//! Data structures for Puka Cuckoo.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic behavior for reproducible testing
//! - Explicit, inspectable state

pub mod puka_cuckoo_hash;

// Re-export common data structures
pub use puka_cuckoo_hash::{HashFamily, PukaCuckooHash, PukaCuckooHashConfig, SeededHashFamily};
