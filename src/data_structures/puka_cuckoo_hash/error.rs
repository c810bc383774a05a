// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Puka Cuckoo Hash table.

/// Reasons an insertion is rejected before any mutation happens.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PukaCuckooHashError {
    /// Every cell of capacity is spent (slots plus overflow)
    #[error("Cuckoo hash table is full ({capacity} keys)")]
    TableFull {
        /// The fixed capacity of the table
        capacity: usize,
    },

    /// Key already exists in the table
    #[error("Key already exists in the table: {0}")]
    KeyExists(String),
}

/// Result type for Puka Cuckoo Hash operations
pub type Result<T> = std::result::Result<T, PukaCuckooHashError>;
