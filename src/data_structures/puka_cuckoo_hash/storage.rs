// Copyright (c) 2025 Puka Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Primary slot storage and the overflow stash.
//!
//! Both types are plain storage. Placement policy lives in the eviction engine.

/// Fixed-length array of optional keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlotTable {
    cells: Vec<Option<String>>,
    occupied: usize,
}

impl SlotTable {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            cells: vec![None; capacity],
            occupied: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of non-empty cells.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    pub(crate) fn get(&self, index: usize) -> Option<&str> {
        self.cells[index].as_deref()
    }

    pub(crate) fn is_empty(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Writes `value` into the cell and returns what was there before.
    pub(crate) fn set(&mut self, index: usize, value: Option<String>) -> Option<String> {
        let previous = std::mem::replace(&mut self.cells[index], value);
        match (&previous, &self.cells[index]) {
            (None, Some(_)) => self.occupied += 1,
            (Some(_), None) => self.occupied -= 1,
            _ => {}
        }
        previous
    }

    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.occupied = 0;
    }

    pub(crate) fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Iterates over `(index, key)` for every occupied cell, in index order.
    pub(crate) fn iter_occupied(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.as_deref().map(|key| (index, key)))
    }
}

/// Keys that could not be placed in a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OverflowStore {
    entries: Vec<String>,
}

impl OverflowStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends a key and returns its position.
    pub(crate) fn push(&mut self, key: String) -> usize {
        self.entries.push(key);
        self.entries.len() - 1
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == key)
    }

    /// Removes the first entry equal to `key`.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_occupancy_tracking() {
        let mut slots = SlotTable::new(5);
        assert_eq!(slots.len(), 5);
        assert!(slots.is_empty(3));

        assert_eq!(slots.set(3, Some("a".to_string())), None);
        assert_eq!(slots.occupied(), 1);

        // Overwriting an occupied cell keeps the count
        assert_eq!(slots.set(3, Some("b".to_string())), Some("a".to_string()));
        assert_eq!(slots.occupied(), 1);
        assert_eq!(slots.get(3), Some("b"));

        assert_eq!(slots.set(3, None), Some("b".to_string()));
        assert_eq!(slots.occupied(), 0);
        assert!(slots.is_empty(3));
    }

    #[test]
    fn test_iter_occupied_and_clear() {
        let mut slots = SlotTable::new(4);
        slots.set(2, Some("x".to_string()));
        slots.set(0, Some("y".to_string()));

        let occupied: Vec<_> = slots.iter_occupied().collect();
        assert_eq!(occupied, vec![(0, "y"), (2, "x")]);

        slots.clear();
        assert_eq!(slots.occupied(), 0);
        assert!(slots.cells().iter().all(Option::is_none));
    }

    #[test]
    fn test_overflow_store() {
        let mut overflow = OverflowStore::new();
        assert_eq!(overflow.push("a".to_string()), 0);
        assert_eq!(overflow.push("b".to_string()), 1);
        assert_eq!(overflow.position("b"), Some(1));
        assert_eq!(overflow.position("c"), None);

        assert!(overflow.remove("a"));
        assert!(!overflow.remove("a"));
        assert_eq!(overflow.entries(), &["b".to_string()]);

        overflow.clear();
        assert_eq!(overflow.len(), 0);
    }
}
