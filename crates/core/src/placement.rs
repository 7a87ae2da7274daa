//! Placement representation for packed parcels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The immutable result of placing one parcel.
///
/// A placement records the anchor of the square and the side length actually
/// granted. The packer never shrinks a request, so `size` always equals the
/// requested side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Anchor column of the placed square.
    pub x: usize,
    /// Anchor row of the placed square.
    pub y: usize,
    /// Side length of the placed square.
    pub size: usize,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(x: usize, y: usize, size: usize) -> Self {
        Self { x, y, size }
    }

    /// Right edge of the footprint (exclusive).
    pub fn right(&self) -> usize {
        self.x + self.size
    }

    /// Top edge of the footprint (exclusive; rows grow forward).
    pub fn top(&self) -> usize {
        self.y + self.size
    }

    /// Returns true if this footprint contains the cell `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.top()
    }

    /// Returns true if two footprints share any cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}
