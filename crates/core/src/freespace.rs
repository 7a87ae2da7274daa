//! Per-row registry of free-space slots.
//!
//! This module confines every mutation of free-space state to a handful of
//! primitives (`insert`, `remove`, `push_row`). The packer never touches a
//! row's contents except through them, which is what keeps the coverage and
//! non-overlap invariants checkable in one place.

use std::collections::BTreeMap;

use crate::slot::Slot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single grid row owning its free slots.
///
/// Slots are keyed by anchor column in a `BTreeMap`, which provides both the
/// ascending-x scan order and the exact-anchor point lookup from a single
/// structure that cannot desynchronize.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    y: usize,
    slots: BTreeMap<usize, usize>,
}

impl Row {
    fn new(y: usize) -> Self {
        Self {
            y,
            slots: BTreeMap::new(),
        }
    }

    /// Returns this row's grid y coordinate.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns the number of slots registered in this row.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if this row has no free slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates this row's slots in ascending-x order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.iter().map(|(&x, &r)| Slot::new(x, self.y, r))
    }
}

/// Registry of free-space slots, one ordered slot set per row.
///
/// Rows are created lazily, lowest-y-first, and never removed. A row's
/// storage index is `y - row_offset`; the offset exists so a future
/// implementation could discard fully packed rows, but it is never advanced
/// in current usage.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeSpaceIndex {
    width: usize,
    row_offset: usize,
    rows: Vec<Row>,
}

impl FreeSpaceIndex {
    /// Creates an empty index for a grid of the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            row_offset: 0,
            rows: Vec::new(),
        }
    }

    /// Returns the configured grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows created so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_index(&self, y: usize) -> Option<usize> {
        // Out-of-range means the row simply does not exist yet.
        let index = y.checked_sub(self.row_offset)?;
        (index < self.rows.len()).then_some(index)
    }

    /// Returns the row at `y`, if it has been created.
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.row_index(y).map(|i| &self.rows[i])
    }

    fn row_mut(&mut self, y: usize) -> Option<&mut Row> {
        self.row_index(y).map(move |i| &mut self.rows[i])
    }

    /// Creates the next row and returns its y coordinate.
    ///
    /// Rows are always appended in increasing y order, matching the grid's
    /// forward growth.
    pub fn push_row(&mut self) -> usize {
        let y = self.rows.len() + self.row_offset;
        self.rows.push(Row::new(y));
        y
    }

    /// Returns the slot anchored exactly at `(x, y)`, if any.
    pub fn slot_at(&self, x: usize, y: usize) -> Option<Slot> {
        let row = self.row(y)?;
        row.slots.get(&x).map(|&r| Slot::new(x, y, r))
    }

    /// Registers a slot, preserving ascending-x order within its row.
    ///
    /// A zero-capacity slot is a no-op. If a slot already exists at the same
    /// anchor, the existing descriptor is widened to the larger capacity,
    /// never narrowed. Inserting into a row that does not exist is a silent
    /// no-op: absence is a valid state for these sparse structures.
    pub fn insert(&mut self, slot: Slot) {
        if slot.r == 0 {
            return;
        }
        let Some(row) = self.row_mut(slot.y) else {
            return;
        };
        let r = row.slots.entry(slot.x).or_insert(0);
        *r = (*r).max(slot.r);
    }

    /// Removes the slot anchored at `(x, y)`, if present.
    pub fn remove(&mut self, x: usize, y: usize) {
        if let Some(row) = self.row_mut(y) {
            row.slots.remove(&x);
        }
    }

    /// Iterates rows in creation order (ascending y).
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Iterates every live slot, row by row, ascending x within each row.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.rows.iter().flat_map(|row| row.slots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_sequential() {
        let mut index = FreeSpaceIndex::new(8);
        assert_eq!(index.push_row(), 0);
        assert_eq!(index.push_row(), 1);
        assert_eq!(index.push_row(), 2);
        assert_eq!(index.row_count(), 3);
        assert_eq!(index.row(1).map(Row::y), Some(1));
        assert!(index.row(3).is_none());
    }

    #[test]
    fn test_insert_preserves_x_order() {
        let mut index = FreeSpaceIndex::new(16);
        index.push_row();
        index.insert(Slot::new(9, 0, 2));
        index.insert(Slot::new(1, 0, 3));
        index.insert(Slot::new(4, 0, 1));

        let xs: Vec<usize> = index.slots().map(|s| s.x).collect();
        assert_eq!(xs, vec![1, 4, 9]);
    }

    #[test]
    fn test_insert_merges_by_widening() {
        let mut index = FreeSpaceIndex::new(16);
        index.push_row();
        index.insert(Slot::new(4, 0, 2));
        index.insert(Slot::new(4, 0, 5));
        assert_eq!(index.slot_at(4, 0), Some(Slot::new(4, 0, 5)));

        // Narrower insert never shrinks the existing descriptor.
        index.insert(Slot::new(4, 0, 1));
        assert_eq!(index.slot_at(4, 0), Some(Slot::new(4, 0, 5)));
        assert_eq!(index.row(0).map(Row::len), Some(1));
    }

    #[test]
    fn test_zero_capacity_is_noop() {
        let mut index = FreeSpaceIndex::new(16);
        index.push_row();
        index.insert(Slot::new(3, 0, 0));
        assert!(index.slot_at(3, 0).is_none());
        assert!(index.row(0).unwrap().is_empty());
    }

    #[test]
    fn test_insert_into_missing_row_is_noop() {
        let mut index = FreeSpaceIndex::new(16);
        index.insert(Slot::new(0, 5, 4));
        assert_eq!(index.row_count(), 0);
        assert!(index.slot_at(0, 5).is_none());
    }

    #[test]
    fn test_remove() {
        let mut index = FreeSpaceIndex::new(16);
        index.push_row();
        index.insert(Slot::new(2, 0, 3));
        index.remove(2, 0);
        assert!(index.slot_at(2, 0).is_none());

        // Removing an absent slot is fine.
        index.remove(7, 0);
        index.remove(0, 9);
    }
}
