//! Command execution against a table.

use std::fmt;
use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{OutputFormat, PukaConfig};
use crate::data_structures::puka_cuckoo_hash::{
    HashFamily, Location, Placement, PukaCuckooHash, PukaCuckooHashConfig, SeededHashFamily,
};
use crate::error::PukaResult;
use crate::script::command::{parse_line, parse_script, Command};

/// An occupied slot in a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotEntry {
    /// Slot index
    pub index: usize,
    /// Stored key
    pub key: String,
}

/// The result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    /// Result of `insert`.
    Insert {
        /// The key
        key: String,
        /// Where the final write went, when the insert succeeded
        placement: Option<Placement>,
        /// Why the insert was rejected
        rejected: Option<String>,
        /// Table size afterwards
        size: usize,
    },
    /// Result of `find`.
    Find {
        /// The key
        key: String,
        /// Where the key is stored, if present
        location: Option<Location>,
    },
    /// Result of `remove`.
    Remove {
        /// The key
        key: String,
        /// Whether the key was present
        removed: bool,
        /// Table size afterwards
        size: usize,
    },
    /// Result of `undo`.
    Undo {
        /// Whether an insertion was reverted
        reverted: bool,
        /// Table size afterwards
        size: usize,
    },
    /// Result of `size`.
    Size {
        /// Number of stored keys
        size: usize,
    },
    /// Result of `capacity`.
    Capacity {
        /// Fixed capacity
        capacity: usize,
    },
    /// Result of `clear`.
    Clear,
    /// Result of `dump`.
    Dump {
        /// Occupied slots in index order
        slots: Vec<SlotEntry>,
        /// Overflow entries in stash order
        overflow: Vec<String>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Insert { key, placement: Some(Placement::Slot(index)), size, .. } => {
                write!(f, "insert {key}: ok (slot {index}, size {size})")
            }
            Outcome::Insert { key, placement: Some(Placement::Overflow(index)), size, .. } => {
                write!(f, "insert {key}: ok (overflow {index}, size {size})")
            }
            Outcome::Insert { key, rejected, .. } => {
                let reason = rejected.as_deref().unwrap_or("rejected");
                write!(f, "insert {key}: failed ({reason})")
            }
            Outcome::Find { key, location: Some(Location::Slot(index)) } => {
                write!(f, "find {key}: found (slot {index})")
            }
            Outcome::Find { key, location: Some(Location::Overflow(index)) } => {
                write!(f, "find {key}: found (overflow {index})")
            }
            Outcome::Find { key, location: None } => write!(f, "find {key}: not found"),
            Outcome::Remove { key, removed, size } => {
                let status = if *removed { "removed" } else { "not found" };
                write!(f, "remove {key}: {status} (size {size})")
            }
            Outcome::Undo { reverted, size } => {
                let status = if *reverted { "reverted" } else { "nothing to undo" };
                write!(f, "undo: {status} (size {size})")
            }
            Outcome::Size { size } => write!(f, "size: {size}"),
            Outcome::Capacity { capacity } => write!(f, "capacity: {capacity}"),
            Outcome::Clear => f.write_str("clear: ok"),
            Outcome::Dump { slots, overflow } => {
                f.write_str("dump:")?;
                for entry in slots {
                    write!(f, "\nIndex: {}, Key: {}", entry.index, entry.key)?;
                }
                for (position, key) in overflow.iter().enumerate() {
                    write!(f, "\nOverflow[{position}], Key: {key}")?;
                }
                Ok(())
            }
        }
    }
}

/// Executes commands against an owned table and writes their outcomes.
#[derive(Debug)]
pub struct ScriptRunner<H: HashFamily = SeededHashFamily> {
    table: PukaCuckooHash<H>,
    format: OutputFormat,
}

impl ScriptRunner<SeededHashFamily> {
    /// Builds a runner with a fresh table described by `config`.
    pub fn from_config(config: &PukaConfig) -> Self {
        let table = PukaCuckooHash::with_config(PukaCuckooHashConfig::from(&config.table));
        Self::new(table, config.output.format)
    }
}

impl<H: HashFamily> ScriptRunner<H> {
    /// Creates a runner over `table`.
    pub fn new(table: PukaCuckooHash<H>, format: OutputFormat) -> Self {
        Self { table, format }
    }

    /// The table commands run against.
    pub fn table(&self) -> &PukaCuckooHash<H> {
        &self.table
    }

    /// Executes a single command.
    pub fn execute(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Insert(key) => {
                let (placement, rejected) = match self.table.try_insert(key) {
                    Ok(placement) => (Some(placement), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                Outcome::Insert {
                    key: key.clone(),
                    placement,
                    rejected,
                    size: self.table.size(),
                }
            }
            Command::Find(key) => Outcome::Find {
                key: key.clone(),
                location: self.table.locate(key),
            },
            Command::Remove(key) => Outcome::Remove {
                key: key.clone(),
                removed: self.table.remove(key),
                size: self.table.size(),
            },
            Command::Undo => Outcome::Undo {
                reverted: self.table.undo(),
                size: self.table.size(),
            },
            Command::Size => Outcome::Size {
                size: self.table.size(),
            },
            Command::Capacity => Outcome::Capacity {
                capacity: self.table.capacity(),
            },
            Command::Clear => {
                self.table.make_empty();
                Outcome::Clear
            }
            Command::Dump => Outcome::Dump {
                slots: self
                    .table
                    .slots()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, cell)| {
                        cell.as_ref().map(|key| SlotEntry {
                            index,
                            key: key.clone(),
                        })
                    })
                    .collect(),
                overflow: self.table.overflow().to_vec(),
            },
        }
    }

    /// Parses `source` as a whole and executes it.
    ///
    /// Nothing is executed if any line fails to parse.
    ///
    /// # Returns
    ///
    /// The number of commands executed.
    pub fn run_script<W: Write>(&mut self, source: &str, out: &mut W) -> PukaResult<usize> {
        let commands = parse_script(source)?;
        for command in &commands {
            let outcome = self.execute(command);
            self.write_outcome(&outcome, out)?;
        }
        info!(commands = commands.len(), size = self.table.size(), "script finished");
        Ok(commands.len())
    }

    /// Executes commands line by line as they are read.
    ///
    /// Bad lines are reported on `out` and skipped.
    ///
    /// # Returns
    ///
    /// The number of commands executed.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        out: &mut W,
    ) -> PukaResult<usize> {
        let mut executed = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(index + 1, &line) {
                Ok(Some(command)) => {
                    let outcome = self.execute(&command);
                    self.write_outcome(&outcome, out)?;
                    executed += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "skipping bad command");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        Ok(executed)
    }

    fn write_outcome<W: Write>(&self, outcome: &Outcome, out: &mut W) -> PukaResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{outcome}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, outcome)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
