// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The Puka Cuckoo Hash table facade.
//!
//! Composes the slot table, the overflow store, the eviction engine and the undo log
//! behind a set-like API over text keys.

use std::fmt;

use tracing::debug;

use crate::data_structures::puka_cuckoo_hash::config::{PukaCuckooHashConfig, DEFAULT_TABLE_SIZE};
use crate::data_structures::puka_cuckoo_hash::error::{PukaCuckooHashError, Result};
use crate::data_structures::puka_cuckoo_hash::eviction::{EvictionEngine, Placement};
use crate::data_structures::puka_cuckoo_hash::hash::{normalize, HashFamily, SeededHashFamily};
use crate::data_structures::puka_cuckoo_hash::prime::next_prime;
use crate::data_structures::puka_cuckoo_hash::storage::{OverflowStore, SlotTable};
use crate::data_structures::puka_cuckoo_hash::undo::UndoLog;

/// Where a present key is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum Location {
    /// In the slot at this index.
    Slot(usize),
    /// In the overflow store at this position.
    Overflow(usize),
}

/// A fixed-capacity cuckoo hash set over text keys with single-step insertion undo.
///
/// Every key has one candidate slot per hash function. Inserting may relocate resident
/// keys; when relocation cycles or runs out of rounds, a key is stashed in an overflow
/// list instead. Each successful insert can be reverted exactly with [`undo`], most recent
/// first, until a [`remove`] or [`make_empty`] discards the history.
///
/// Capacity counts slots and overflow entries together: an insert is rejected once
/// `size() == capacity()` even if some slot happens to be free.
///
/// # Type Parameters
///
/// * `H` - The hash family. Defaults to the seeded FNV family.
///
/// [`undo`]: PukaCuckooHash::undo
/// [`remove`]: PukaCuckooHash::remove
/// [`make_empty`]: PukaCuckooHash::make_empty
#[derive(Debug, Clone)]
pub struct PukaCuckooHash<H: HashFamily = SeededHashFamily> {
    hash_family: H,
    function_count: usize,
    slots: SlotTable,
    overflow: OverflowStore,
    size: usize,
    undo_log: UndoLog,
}

impl PukaCuckooHash<SeededHashFamily> {
    /// Creates an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PukaCuckooHashConfig::default())
    }

    /// Creates an empty table from a configuration.
    pub fn with_config(config: PukaCuckooHashConfig) -> Self {
        Self::with_hash_family(config.hash_family(), config.initial_capacity)
    }
}

impl Default for PukaCuckooHash<SeededHashFamily> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HashFamily> PukaCuckooHash<H> {
    /// Creates an empty table of the default size using `hash_family`.
    pub fn with_default_size(hash_family: H) -> Self {
        Self::with_hash_family(hash_family, DEFAULT_TABLE_SIZE)
    }

    /// Creates an empty table using `hash_family`.
    ///
    /// # Arguments
    ///
    /// * `hash_family` - Supplies the probe positions for every key.
    /// * `requested_size` - Rounded up to the next odd prime to fix the capacity.
    pub fn with_hash_family(hash_family: H, requested_size: usize) -> Self {
        let capacity = next_prime(requested_size);
        let function_count = hash_family.number_of_functions();
        debug!(requested_size, capacity, function_count, "creating cuckoo hash table");

        Self {
            hash_family,
            function_count,
            slots: SlotTable::new(capacity),
            overflow: OverflowStore::new(),
            size: 0,
            undo_log: UndoLog::new(),
        }
    }

    /// Number of keys stored, in slots and overflow.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maximum number of keys; the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of keys currently in the overflow store.
    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    /// Number of insertions that [`undo`](Self::undo) can still revert.
    pub fn undo_depth(&self) -> usize {
        self.undo_log.depth()
    }

    /// The undo history, most recent group last.
    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    /// The hash family in use.
    pub fn hash_family(&self) -> &H {
        &self.hash_family
    }

    /// Key stored in slot `index`, if any. Returns `None` for out-of-range indices.
    pub fn slot(&self, index: usize) -> Option<&str> {
        if index < self.capacity() {
            self.slots.get(index)
        } else {
            None
        }
    }

    /// All slots in index order.
    pub fn slots(&self) -> &[Option<String>] {
        self.slots.cells()
    }

    /// Overflow entries in stash order.
    pub fn overflow(&self) -> &[String] {
        self.overflow.entries()
    }

    /// Inserts `key` if absent and capacity remains.
    ///
    /// # Returns
    ///
    /// `true` if the key was placed in a slot or in overflow, `false` if the key was
    /// already present or the table is full. A `false` return leaves the table untouched.
    pub fn insert(&mut self, key: &str) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Inserts `key`, reporting where it went or why it was rejected.
    ///
    /// The returned placement is that of the final write: on a displacement chain that
    /// ends in overflow, the stashed key may be one that `key` displaced.
    ///
    /// # Errors
    ///
    /// * [`PukaCuckooHashError::TableFull`] when `size() == capacity()`.
    /// * [`PukaCuckooHashError::KeyExists`] when `key` is already present.
    pub fn try_insert(&mut self, key: &str) -> Result<Placement> {
        if self.size == self.capacity() {
            return Err(PukaCuckooHashError::TableFull {
                capacity: self.capacity(),
            });
        }
        if self.find(key) {
            return Err(PukaCuckooHashError::KeyExists(key.to_string()));
        }

        let max_tries = self.size;
        let engine = EvictionEngine::new(
            &self.hash_family,
            self.function_count,
            &mut self.slots,
            &mut self.overflow,
        );
        let (placement, group) = engine.place(key.to_string(), max_tries);

        debug!(key, ?placement, writes = group.len(), "inserted");
        self.undo_log.push(group);
        self.size += 1;
        Ok(placement)
    }

    /// Returns whether `key` is present.
    pub fn find(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Alias of [`find`](Self::find).
    pub fn contains(&self, key: &str) -> bool {
        self.find(key)
    }

    /// Finds where `key` is stored.
    ///
    /// Probes every hash position first, then scans the overflow store.
    pub fn locate(&self, key: &str) -> Option<Location> {
        (0..self.function_count)
            .map(|function| self.position(key, function))
            .find(|&pos| self.slots.get(pos) == Some(key))
            .map(Location::Slot)
            .or_else(|| self.overflow.position(key).map(Location::Overflow))
    }

    /// Removes `key` and discards the entire undo history.
    ///
    /// # Returns
    ///
    /// `true` if the key was present. The history is only discarded when a removal
    /// actually happens.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(location) = self.locate(key) else {
            return false;
        };

        match location {
            Location::Slot(index) => {
                self.slots.set(index, None);
            }
            Location::Overflow(_) => {
                self.overflow.remove(key);
            }
        }
        self.size -= 1;

        let discarded = self.undo_log.depth();
        self.undo_log.clear();
        debug!(key, ?location, discarded, "removed");
        true
    }

    /// Reverts the most recent successful insertion.
    ///
    /// # Returns
    ///
    /// `true` if an insertion was reverted, `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(group) = self.undo_log.pop() else {
            return false;
        };

        debug!(writes = group.len(), remaining = self.undo_log.depth(), "undoing insertion");
        group.revert(&mut self.slots, &mut self.overflow);
        self.size -= 1;
        debug_assert_eq!(self.size, self.slots.occupied() + self.overflow.len());
        true
    }

    /// Removes every key and the undo history. Capacity is unchanged.
    pub fn make_empty(&mut self) {
        self.slots.clear();
        self.overflow.clear();
        self.undo_log.clear();
        self.size = 0;
    }

    fn position(&self, key: &str, function: usize) -> usize {
        normalize(self.hash_family.hash(key, function), self.capacity())
    }
}

impl<H: HashFamily> fmt::Display for PukaCuckooHash<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.slots.iter_occupied() {
            writeln!(f, "Index: {index}, Key: {key}")?;
        }
        for (position, key) in self.overflow.entries().iter().enumerate() {
            writeln!(f, "Overflow[{position}], Key: {key}")?;
        }
        Ok(())
    }
}
