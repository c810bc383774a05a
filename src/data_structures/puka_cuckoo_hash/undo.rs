// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reversible record of insertions.
//!
//! Every successful insert produces one [`InsertionGroup`]: the ordered list of low-level
//! writes it performed. Groups are stacked in the [`UndoLog`], and undoing pops the most
//! recent group and reverts its records newest-first. A record's position in its group is
//! its sequence number.

use crate::data_structures::puka_cuckoo_hash::storage::{OverflowStore, SlotTable};

/// One low-level write performed during an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// A slot was overwritten; `previous` is what it held before (`None` if it was empty).
    Slot {
        /// Index of the written slot
        index: usize,
        /// Content of the slot before the write
        previous: Option<String>,
    },

    /// A key was appended to the overflow store.
    Overflow {
        /// The appended key
        key: String,
    },
}

impl Mutation {
    /// Reverts this write.
    fn revert(self, slots: &mut SlotTable, overflow: &mut OverflowStore) {
        match self {
            Mutation::Slot { index, previous } => {
                slots.set(index, previous);
            }
            Mutation::Overflow { key } => {
                overflow.remove(&key);
            }
        }
    }
}

/// The mutations of a single insertion, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionGroup {
    records: Vec<Mutation>,
}

impl InsertionGroup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, mutation: Mutation) {
        self.records.push(mutation);
    }

    /// Records in application order.
    pub fn records(&self) -> &[Mutation] {
        &self.records
    }

    /// Number of records in the group.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the group holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replays the group backwards, restoring the state before its first record.
    pub(crate) fn revert(self, slots: &mut SlotTable, overflow: &mut OverflowStore) {
        for mutation in self.records.into_iter().rev() {
            mutation.revert(slots, overflow);
        }
    }
}

/// LIFO stack of insertion groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoLog {
    groups: Vec<InsertionGroup>,
}

impl UndoLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, group: InsertionGroup) {
        self.groups.push(group);
    }

    pub(crate) fn pop(&mut self) -> Option<InsertionGroup> {
        self.groups.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.groups.clear();
    }

    /// Number of undoable insertions.
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether nothing can be undone.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group that the next undo would revert.
    pub fn peek(&self) -> Option<&InsertionGroup> {
        self.groups.last()
    }
}
