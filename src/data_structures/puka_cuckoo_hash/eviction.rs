// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Displacement engine for the Puka Cuckoo Hash table.
//!
//! Placement runs in rounds. Each round probes every hash position of the working key and
//! takes the first empty slot. When all probes collide, the engine evicts one occupant
//! (the kick), writes the working key in its place and continues with the evicted key.
//!
//! Eviction is deterministic: the first round kicks at the hash-0 position, later rounds
//! kick at the last probed position unless that is where the previous kick happened, in
//! which case the hash-0 position is used again. A chain that probes a key at a position it
//! was already tested at is a cycle; cycles and exhausted round budgets both spill the
//! working key into the overflow store, so placement always succeeds.

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::data_structures::puka_cuckoo_hash::hash::{normalize, HashFamily};
use crate::data_structures::puka_cuckoo_hash::storage::{OverflowStore, SlotTable};
use crate::data_structures::puka_cuckoo_hash::undo::{InsertionGroup, Mutation};

/// Where an inserted key ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum Placement {
    /// The key was written to a slot (possibly after displacing others).
    Slot(usize),
    /// The key, or a key it displaced, was appended to overflow at this position.
    Overflow(usize),
}

/// Keys tested at each slot during a single insertion.
///
/// Scratch state: created per insertion and dropped with it.
#[derive(Debug, Default)]
struct CycleTracker {
    visited: HashMap<usize, HashSet<String>>,
}

impl CycleTracker {
    /// Marks `key` as tested at `pos`. Returns `false` if it already was.
    fn visit(&mut self, pos: usize, key: &str) -> bool {
        let seen = self.visited.entry(pos).or_default();
        if seen.contains(key) {
            return false;
        }
        seen.insert(key.to_owned());
        true
    }
}

/// Borrowed view of the table state that one insertion mutates.
pub(crate) struct EvictionEngine<'a, H: HashFamily> {
    hash_family: &'a H,
    function_count: usize,
    slots: &'a mut SlotTable,
    overflow: &'a mut OverflowStore,
}

impl<'a, H: HashFamily> EvictionEngine<'a, H> {
    pub(crate) fn new(
        hash_family: &'a H,
        function_count: usize,
        slots: &'a mut SlotTable,
        overflow: &'a mut OverflowStore,
    ) -> Self {
        Self {
            hash_family,
            function_count,
            slots,
            overflow,
        }
    }

    fn position(&self, key: &str, function: usize) -> usize {
        normalize(self.hash_family.hash(key, function), self.slots.len())
    }

    /// Places `key`, displacing occupants for at most `max_tries + 1` rounds.
    ///
    /// The caller guarantees `key` is absent and that capacity remains. Returns the final
    /// placement and the group of writes that reverts it.
    pub(crate) fn place(mut self, key: String, max_tries: usize) -> (Placement, InsertionGroup) {
        let mut group = InsertionGroup::new();
        let mut tracker = CycleTracker::default();
        let mut working = key;
        let mut kick_pos: Option<usize> = None;

        'rounds: for round in 0..=max_tries {
            let mut pos = 0;
            for function in 0..self.function_count {
                pos = self.position(&working, function);
                if !tracker.visit(pos, &working) {
                    debug!(key = %working, pos, round, "displacement cycle detected");
                    break 'rounds;
                }
                if self.slots.is_empty(pos) {
                    trace!(key = %working, pos, round, "placed in empty slot");
                    self.slots.set(pos, Some(working));
                    group.record(Mutation::Slot { index: pos, previous: None });
                    return (Placement::Slot(pos), group);
                }
            }

            let kick = match kick_pos {
                Some(previous) if previous != pos => pos,
                _ => self.position(&working, 0),
            };
            kick_pos = Some(kick);

            let displaced = self.slots.set(kick, Some(working));
            group.record(Mutation::Slot {
                index: kick,
                previous: displaced.clone(),
            });
            working = match displaced {
                Some(evicted) => {
                    trace!(evicted = %evicted, pos = kick, round, "kicked occupant");
                    evicted
                }
                // Every kick position was probed this round, so it is never empty.
                None => return (Placement::Slot(kick), group),
            };
        }

        debug!(key = %working, "spilling to overflow");
        let position = self.overflow.push(working.clone());
        group.record(Mutation::Overflow { key: working });
        (Placement::Overflow(position), group)
    }
}
