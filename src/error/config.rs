//! Configuration error module.
//!
//! Errors raised while locating, reading and validating a Puka configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [`PukaConfig`](crate::config::PukaConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file extension is not toml, json, yaml or yml.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A source could not be read or did not match the configuration layout.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value is well-formed but not acceptable.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric setting lies outside its permitted range.
    #[error("Configuration value {key} is out of range: {message}")]
    ValueOutOfRange {
        /// Dotted path of the setting, e.g. `table.hash_functions`
        key: String,
        /// The permitted range
        message: String,
    },
}
