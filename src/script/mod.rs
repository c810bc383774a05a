//! Command scripts for driving a table.
//!
//! A script is plain text with one command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! insert apple
//! find apple
//! remove apple
//! undo
//! size
//! capacity
//! clear
//! dump
//! ```
//!
//! Every executed command yields an [`Outcome`], printed as text or as one JSON object
//! per line.
//!
//! ```
//! use puka_cuckoo_lib::config::PukaConfig;
//! use puka_cuckoo_lib::script::ScriptRunner;
//!
//! let mut runner = ScriptRunner::from_config(&PukaConfig::default());
//! let mut out = Vec::new();
//! runner.run_script("insert apple\nundo\nsize\n", &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("size: 0\n"));
//! ```

pub mod command;
pub mod runner;

pub use command::{parse_line, parse_script, Command};
pub use runner::{Outcome, ScriptRunner, SlotEntry};
