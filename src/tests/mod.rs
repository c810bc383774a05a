//! Test modules for Puka Cuckoo.
//!
//! This module contains crate-level test suites:
//! - Configuration loading and validation
//! - Model-based property tests of the cuckoo hash table
//! - Shared fixtures and strategies

pub mod config_tests;

pub use test_utils::{scripted_family, table_op_strategy, TableOp, TestFixture};
