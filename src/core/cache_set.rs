//! Single Associative Cache Set.
//!
//! A fixed number of slots, each either empty or holding one resident line.
//! Slots are filled in index order while the set has free capacity, and a
//! full set only changes through [`CacheSet::replace`]. Slot order is stable
//! and is the scan order used for lookups and for eviction tie-breaking.

use crate::common::LineId;
use crate::config::Associativity;

/// Cache set with a fixed number of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSet {
    slots: Vec<Option<LineId>>,
    len: usize,
}

impl CacheSet {
    /// Creates an empty set with `ways` slots.
    pub fn new(ways: Associativity) -> Self {
        Self {
            slots: vec![None; ways.get()],
            len: 0,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of resident lines.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no line is resident.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when every slot holds a line.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Slot index holding `line`, scanning in slot order.
    pub fn find(&self, line: LineId) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == Some(line))
    }

    /// Returns `true` if `line` is resident.
    pub fn contains(&self, line: LineId) -> bool {
        self.find(line).is_some()
    }

    /// Places `line` in the first free slot.
    ///
    /// Returns the slot index, or `None` if the set is full. The caller is
    /// responsible for not inserting a line that is already resident.
    pub fn insert(&mut self, line: LineId) -> Option<usize> {
        debug_assert!(!self.contains(line), "line {line} already resident");
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(line);
        self.len += 1;
        Some(slot)
    }

    /// Overwrites an occupied slot with `line`, returning the evicted line.
    ///
    /// Returns `None` and leaves the set unchanged if `slot` is out of range
    /// or empty.
    pub fn replace(&mut self, slot: usize, line: LineId) -> Option<LineId> {
        let resident = self.slots.get_mut(slot)?.as_mut()?;
        Some(std::mem::replace(resident, line))
    }

    /// Resident lines with their slot index, in slot order.
    pub fn residents(&self) -> impl Iterator<Item = (usize, LineId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|line| (i, line)))
    }

    /// Current slot contents in fixed slot order.
    pub fn slots(&self) -> &[Option<LineId>] {
        &self.slots
    }

    /// Empties every slot.
    pub fn flush(&mut self) {
        self.slots.fill(None);
        self.len = 0;
    }
}
