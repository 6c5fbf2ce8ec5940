//! Slot table backing a single hotbar.
//!
//! A table is an ordered, sparse sequence of slots. Position is meaningful:
//! it is the order the user arranged the items in. Tables start at
//! [`DEFAULT_HOTBAR_CELLS`] slots and grow by one whenever an item is added
//! while every slot is taken. They never shrink on their own.

use tracing::debug;

use crate::error::HotbarError;
use crate::item::ItemRef;

/// Number of slots in a freshly created hotbar.
///
/// Small enough that every cell can be reached from the keyboard.
pub const DEFAULT_HOTBAR_CELLS: usize = 12;

/// One position in a table: `None` is an empty cell.
pub type Slot = Option<ItemRef>;

/// Scan direction for [`SlotTable::find_nearest_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards index zero.
    Backward,
}

impl Direction {
    /// Next index in this direction, or `None` when stepping below zero.
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Forward => index.checked_add(1),
            Direction::Backward => index.checked_sub(1),
        }
    }
}

/// Ordered, growable table of hotbar slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Create an all-empty table of the default size.
    pub fn new() -> Self {
        Self::with_len(DEFAULT_HOTBAR_CELLS)
    }

    /// Create an all-empty table with `len` slots.
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Wrap an existing slot sequence as-is.
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Number of slots, empty or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The item in `index`, if the slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&ItemRef> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Borrow the raw slots.
    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterate over every slot in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Consume the table, returning its slots.
    pub fn into_slots(self) -> Vec<Slot> {
        self.slots
    }

    /// Index of the slot holding `uid`.
    pub fn position_of(&self, uid: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| item.refers_to(uid)))
    }

    /// Whether `uid` is pinned anywhere in this table.
    pub fn contains(&self, uid: &str) -> bool {
        self.position_of(uid).is_some()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of empty slots.
    pub fn empty_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    /// Put `item` into `index`, replacing whatever was there.
    ///
    /// Returns `false` without touching the table when `index` is past the
    /// end; this never extends the table.
    pub fn place_at(&mut self, index: usize, item: ItemRef) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(item);
                true
            }
            None => false,
        }
    }

    /// Put `item` into the first empty slot, appending a new slot when the
    /// table is full.
    ///
    /// Returns the index used, or `None` when the item is already pinned.
    pub fn place_auto(&mut self, item: ItemRef) -> Option<usize> {
        if self.contains(&item.uid) {
            return None;
        }

        if let Some(index) = self.slots.iter().position(Option::is_none) {
            self.slots[index] = Some(item);
            return Some(index);
        }

        self.slots.push(Some(item));
        debug!(len = self.slots.len(), "hotbar table grew past its free slots");
        Some(self.slots.len() - 1)
    }

    /// Clear the slot holding `uid`, returning its index and the item.
    pub fn remove(&mut self, uid: &str) -> Option<(usize, ItemRef)> {
        let index = self.position_of(uid)?;
        self.slots[index].take().map(|item| (index, item))
    }

    /// Find the closest empty slot starting at `from` (inclusive) and
    /// moving in `direction`.
    ///
    /// The scan stops at either end of the table, so a table without any
    /// empty slot in that direction yields `None`.
    pub fn find_nearest_empty(&self, from: usize, direction: Direction) -> Option<usize> {
        let mut index = Some(from);
        while let Some(current) = index {
            match self.slots.get(current) {
                Some(None) => return Some(current),
                Some(Some(_)) => index = direction.step(current),
                None => return None,
            }
        }
        None
    }

    /// Move the slot at `from` to `to`, shoving the items in between.
    ///
    /// When `to` is occupied, the closest empty slot between `to` and the
    /// vacated origin is dropped and the moved slot is inserted at `to`, so
    /// every other item keeps its relative order and the length is unchanged.
    ///
    /// Returns `Ok(false)` when nothing moves: `from == to`, or both slots
    /// are empty.
    pub fn restack(&mut self, from: isize, to: isize) -> Result<bool, HotbarError> {
        let len = self.slots.len();
        let (Some(from), Some(to)) = (checked_index(from, len), checked_index(to, len)) else {
            return Err(HotbarError::InvalidRange {
                from: from as f64,
                to: to as f64,
                len,
            });
        };

        if from == to {
            return Ok(false);
        }

        if self.slots[from].is_none() && self.slots[to].is_none() {
            return Ok(false);
        }

        let source = self.slots[from].take();
        if self.slots[to].is_none() {
            self.slots[to] = source;
            return Ok(true);
        }

        let direction = if from < to {
            Direction::Backward
        } else {
            Direction::Forward
        };
        match self.find_nearest_empty(to, direction) {
            Some(empty) => {
                self.slots.remove(empty);
                self.slots.insert(to, source);
            }
            None => {
                // Equivalent to growing an empty slot at the scan boundary and
                // consuming it.
                self.slots.insert(to, source);
                debug!(from, to, len = self.slots.len(), "restack grew the table");
            }
        }
        Ok(true)
    }

    /// [`restack`](Self::restack) for positions computed in floating point
    /// (pointer math during drag and drop).
    ///
    /// NaN, infinities and fractional positions are rejected.
    pub fn restack_f64(&mut self, from: f64, to: f64) -> Result<bool, HotbarError> {
        let whole = |value: f64| value.is_finite() && value.fract() == 0.0;
        let in_range = |value: f64| value >= 0.0 && value < self.slots.len() as f64;
        if !(whole(from) && whole(to) && in_range(from) && in_range(to)) {
            return Err(HotbarError::InvalidRange {
                from,
                to,
                len: self.slots.len(),
            });
        }
        self.restack(from as isize, to as isize)
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Slot>> for SlotTable {
    fn from(slots: Vec<Slot>) -> Self {
        Self::from_slots(slots)
    }
}

impl<'a> IntoIterator for &'a SlotTable {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn checked_index(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&index| index < len)
}
