//! Free-space slot and bounding-extent types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A free-space descriptor in the packing grid.
///
/// A slot anchored at `(x, y)` with capacity `r` guarantees that a square of
/// side `<= r` can be placed with its near corner at the anchor without
/// overlapping any previously placed parcel, for every row in `[y, y + r)`.
///
/// Slots are owned exclusively by the row they are anchored in and are only
/// created, widened, truncated or removed through
/// [`FreeSpaceIndex`](crate::FreeSpaceIndex) primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Anchor column.
    pub x: usize,
    /// Anchor row.
    pub y: usize,
    /// Capacity: the largest square side this slot can accept.
    pub r: usize,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(x: usize, y: usize, r: usize) -> Self {
        Self { x, y, r }
    }

    /// Rightmost column reached by this slot's horizontal run (exclusive).
    pub fn right(&self) -> usize {
        self.x + self.r
    }

    /// Returns true if this slot's horizontal run intersects `[left, right)`.
    pub fn intersects_columns(&self, left: usize, right: usize) -> bool {
        self.x < right && self.right() > left
    }
}

/// The smallest axis-aligned box containing every placement made so far.
///
/// Monotonically non-decreasing: placements only ever extend it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Largest occupied column plus one.
    pub x_max: usize,
    /// Largest occupied row plus one.
    pub y_max: usize,
}

impl Extent {
    /// Extends the extent to contain a square at `(x, y)` of side `size`.
    pub fn cover(&mut self, x: usize, y: usize, size: usize) {
        self.x_max = self.x_max.max(x + size);
        self.y_max = self.y_max.max(y + size);
    }

    /// Total cell count of the extent.
    pub fn area(&self) -> usize {
        self.x_max * self.y_max
    }
}
