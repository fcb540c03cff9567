//! Indexed binary min-heap with decrease-key support.
//!
//! [`IndexedMinHeap`] is the priority queue driving Dijkstra's algorithm. In
//! addition to the usual array-backed heap it keeps a position index from key
//! to slot, which makes membership tests O(1) and lets `decrease_key` find an
//! entry without scanning.
//!
//! Slots are numbered from 1: the root is slot 1 and the children of slot `p`
//! are `2p` and `2p + 1`. Every mutation goes through [`IndexedMinHeap::swap_slots`]
//! so the entry array and the position index never disagree.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::node::Distance;

const ROOT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    key: String,
    priority: Distance,
}

/// Min-heap over string keys with a key-to-slot position index.
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    // Slot `n` is stored at `entries[n - 1]`.
    entries: Vec<HeapEntry>,
    positions: HashMap<String, usize>,
}

impl IndexedMinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of `key`, if it is queued.
    pub fn priority(&self, key: &str) -> Option<Distance> {
        self.positions
            .get(key)
            .map(|&slot| self.entry(slot).priority)
    }

    /// Key and priority at the root without removing it.
    pub fn peek(&self) -> Option<(&str, Distance)> {
        self.entries
            .first()
            .map(|entry| (entry.key.as_str(), entry.priority))
    }

    /// Queue `key` with `priority`.
    ///
    /// Returns `false` and leaves the heap untouched if `key` is already
    /// queued; use [`IndexedMinHeap::decrease_key`] to update it instead.
    pub fn insert(&mut self, key: impl Into<String>, priority: Distance) -> bool {
        let key = key.into();
        if self.positions.contains_key(&key) {
            return false;
        }

        self.entries.push(HeapEntry {
            key: key.clone(),
            priority,
        });
        let slot = self.entries.len();
        self.positions.insert(key, slot);
        self.sift_up(slot);
        true
    }

    /// Remove the minimum entry and return its key and priority.
    pub fn pop_min(&mut self) -> Option<(String, Distance)> {
        let last = self.entries.len();
        if last == 0 {
            return None;
        }

        self.swap_slots(ROOT, last);
        let entry = self.entries.pop()?;
        self.positions.remove(&entry.key);

        if !self.entries.is_empty() {
            self.sift_down(ROOT);
        }
        Some((entry.key, entry.priority))
    }

    /// Remove the minimum entry and return its key.
    pub fn extract_min(&mut self) -> Result<String> {
        self.pop_min().map(|(key, _)| key).ok_or(Error::EmptyHeap)
    }

    /// Lower the priority of a queued key.
    ///
    /// Only strict decreases are applied: `Ok(false)` is returned when
    /// `new_priority` is not smaller than the current one.
    pub fn decrease_key(&mut self, key: &str, new_priority: Distance) -> Result<bool> {
        let slot = *self
            .positions
            .get(key)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })?;

        let entry = &mut self.entries[slot - 1];
        if new_priority >= entry.priority {
            return Ok(false);
        }
        entry.priority = new_priority;
        self.sift_up(slot);
        Ok(true)
    }

    /// Check the heap ordering and the position index against each other.
    pub fn is_valid(&self) -> bool {
        let len = self.entries.len();
        if self.positions.len() != len {
            return false;
        }

        let ordered = (ROOT + 1..=len)
            .all(|slot| self.entry(slot).priority >= self.entry(parent(slot)).priority);
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(index, entry)| self.positions.get(&entry.key) == Some(&(index + 1)));

        ordered && indexed
    }

    fn entry(&self, slot: usize) -> &HeapEntry {
        &self.entries[slot - 1]
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > ROOT {
            let parent = parent(slot);
            if self.entry(slot).priority < self.entry(parent).priority {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot;
            let right = left + 1;
            if left > len {
                break;
            }

            let mut child = left;
            if right <= len && self.entry(right).priority < self.entry(left).priority {
                child = right;
            }

            if self.entry(child).priority < self.entry(slot).priority {
                self.swap_slots(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a - 1, b - 1);
        for slot in [a, b] {
            if let Some(position) = self.positions.get_mut(&self.entries[slot - 1].key) {
                *position = slot;
            }
        }
    }
}

fn parent(slot: usize) -> usize {
    slot / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrease_key_reorders_extraction() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("A", 5);
        heap.insert("B", 3);
        heap.insert("C", 8);
        assert!(heap.decrease_key("C", 1).expect("C is queued"));

        let order: Vec<_> = std::iter::from_fn(|| heap.extract_min().ok()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn extract_from_empty_heap_errors() {
        let mut heap = IndexedMinHeap::new();
        assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));
    }

    #[test]
    fn decrease_key_on_missing_key_errors() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("A", 1);
        let err = heap.decrease_key("Z", 0).expect_err("Z not queued");
        assert!(matches!(err, Error::KeyNotFound { key } if key == "Z"));
    }

    #[test]
    fn decrease_key_ignores_increases() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("A", 4);
        assert!(!heap.decrease_key("A", 9).expect("queued"));
        assert!(!heap.decrease_key("A", 4).expect("queued"));
        assert_eq!(heap.priority("A"), Some(4));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut heap = IndexedMinHeap::new();
        assert!(heap.insert("A", 4));
        assert!(!heap.insert("A", 1));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.priority("A"), Some(4));
    }

    #[test]
    fn positions_follow_swaps() {
        let mut heap = IndexedMinHeap::with_capacity(8);
        for (key, priority) in [("d", 4), ("c", 3), ("b", 2), ("a", 1), ("e", 5)] {
            heap.insert(key, priority);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.peek(), Some(("a", 1)));

        heap.extract_min().expect("non-empty");
        assert!(heap.is_valid());
        assert!(!heap.contains("a"));
        assert_eq!(heap.peek(), Some(("b", 2)));
    }
}
