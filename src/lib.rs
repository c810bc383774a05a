//! Puka Cuckoo Library
//!
//! A fixed-capacity cuckoo hash set over text keys with deterministic eviction, an
//! overflow stash and single-step insertion undo, plus the configuration and command
//! script layers used by the `puka_cuckoo` binary.
//!
//! # Architecture
//!
//! - [`data_structures::puka_cuckoo_hash`]: the table itself (hash families, slot and
//!   overflow storage, eviction engine, undo log)
//! - [`script`]: a line-oriented command protocol executed against a table
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types for every layer

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod script;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Puka Cuckoo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
