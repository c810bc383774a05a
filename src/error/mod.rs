//! Error module for Puka Cuckoo.
//!
//! Each component defines its own `thiserror` enum; this module aggregates them into
//! [`PukaError`] so callers can propagate any of them with `?`.

use thiserror::Error;

use crate::data_structures::puka_cuckoo_hash::PukaCuckooHashError;

pub mod config;
pub mod script;

/// Result type alias used throughout Puka Cuckoo.
pub type PukaResult<T> = Result<T, PukaError>;

/// Core error enum for Puka Cuckoo.
#[derive(Error, Debug)]
pub enum PukaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reading or executing a command script.
    #[error("Script error: {0}")]
    Script(#[from] script::ScriptError),

    /// Rejected table operations.
    #[error("Table error: {0}")]
    Table(#[from] PukaCuckooHashError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: PukaError = PukaCuckooHashError::TableFull { capacity: 7 }.into();
        assert_eq!(err.to_string(), "Table error: Cuckoo hash table is full (7 keys)");

        let err: PukaError = config::ConfigError::ValidationError("bad".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: Configuration validation error: bad");
    }
}
