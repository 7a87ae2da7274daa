//! First-fit square packer over the free-space index.

use mondrian_core::{Error, Extent, FreeSpaceIndex, Placement, Result, Slot};

/// Places a stream of squares onto an implicit grid, first-fit, reusing
/// leftover gaps exactly.
///
/// The packer scans rows in creation order and slots in ascending-x order,
/// accepting the first slot whose capacity covers the request. Placement
/// order is significant: every call mutates the shared free-space state
/// consumed by all later calls, so one packer instance serves exactly one
/// block and must not be reused across blocks.
pub struct MondrianPacker {
    free: FreeSpaceIndex,
    extent: Extent,
}

impl MondrianPacker {
    /// Creates a packer for a grid of the given width.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidConfig(
                "grid width must be positive".to_string(),
            ));
        }
        Ok(Self {
            free: FreeSpaceIndex::new(width),
            extent: Extent::default(),
        })
    }

    /// Returns the configured grid width.
    pub fn width(&self) -> usize {
        self.free.width()
    }

    /// Returns the bounding extent reached so far.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the live free-space index, for inspection.
    pub fn free_space(&self) -> &FreeSpaceIndex {
        &self.free
    }

    /// Places a square of the given side length and returns its placement.
    ///
    /// The granted side always equals the request. If no registered slot can
    /// take the square, a fresh full-width row is opened and the square is
    /// anchored at its left edge.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for a zero side (unreachable through
    /// [`size_class`](mondrian_core::size_class), which never returns 0) and
    /// `Error::OversizedParcel` for a side wider than the grid, which no row
    /// could ever satisfy.
    pub fn place(&mut self, size: usize) -> Result<Placement> {
        if size == 0 {
            return Err(Error::InvalidConfig(
                "parcel size must be positive".to_string(),
            ));
        }
        let width = self.free.width();
        if size > width {
            return Err(Error::OversizedParcel { size, width });
        }

        let slot = match self.first_fit(size) {
            Some(slot) => slot,
            None => {
                log::debug!("no free slot fits side {size}, opening a new row");
                let y = self.free.push_row();
                self.free.insert(Slot::new(0, y, width));
                Slot::new(0, y, width)
            }
        };

        Ok(self.fill(slot, size))
    }

    /// First-fit scan: earliest row, then smallest x, wins.
    fn first_fit(&self, size: usize) -> Option<Slot> {
        self.free
            .rows()
            .flat_map(|row| row.slots())
            .find(|slot| slot.r >= size)
    }

    /// Consumes `slot` with a square of side `size`, truncating and
    /// backfilling the surrounding free space so the index stays exact.
    fn fill(&mut self, slot: Slot, size: usize) -> Placement {
        let width = self.free.width();
        let square = Placement::new(slot.x, slot.y, size);

        self.free.remove(slot.x, slot.y);

        // Rows the new square vertically spans.
        for row_y in square.y..square.top() {
            let collisions: Option<Vec<Slot>> = self.free.row(row_y).map(|row| {
                row.slots()
                    .filter(|s| s.right() >= square.x && s.x < square.right())
                    .collect()
            });

            match collisions {
                Some(collisions) => {
                    let max_excess = collisions
                        .iter()
                        .map(|s| s.right().saturating_sub(slot.right()))
                        .max()
                        .unwrap_or(0);

                    // Seed the leftover capacity to the right of the square,
                    // enlarged by the furthest reach of any colliding run. An
                    // already occupied anchor keeps its own descriptor.
                    if square.right() < width
                        && self.free.slot_at(square.right(), row_y).is_none()
                    {
                        self.free
                            .insert(Slot::new(square.right(), row_y, slot.r - size + max_excess));
                    }

                    for c in &collisions {
                        let new_r = square.x.saturating_sub(c.x);
                        self.free.remove(c.x, row_y);
                        // Keep only the portion strictly left of the square.
                        self.free.insert(Slot::new(c.x, row_y, new_r));
                    }
                }
                None => {
                    // Fresh row: seed the complementary free space flanking
                    // the square.
                    let y = self.free.push_row();
                    debug_assert_eq!(y, row_y);
                    if square.x > 0 {
                        self.free.insert(Slot::new(0, row_y, square.x));
                    }
                    if square.right() < width {
                        self.free
                            .insert(Slot::new(square.right(), row_y, width - square.right()));
                    }
                }
            }
        }

        // Rows above the square whose gaps reached down into it: stop each
        // such run at the square's top edge, then carve the displaced
        // remainder back into slots rather than discarding it.
        for row_y in square.y.saturating_sub(size)..square.y {
            let affected: Vec<Slot> = match self.free.row(row_y) {
                Some(row) => row
                    .slots()
                    .filter(|s| {
                        s.intersects_columns(square.x, square.right()) && s.y + s.r >= square.y
                    })
                    .collect(),
                None => continue,
            };

            for s in affected {
                let new_r = square.y - s.y;
                self.free.remove(s.x, row_y);
                self.free.insert(Slot::new(s.x, row_y, new_r));

                // Carve the L-shaped remainder into maximal squares, walking
                // a shrinking rectangle until it is exhausted.
                let mut x = s.x + new_r;
                let mut y = s.y;
                let mut w = s.r - new_r;
                let mut h = new_r;
                while w > 0 && h > 0 {
                    if w <= h {
                        self.free.insert(Slot::new(x, y, w));
                        y += w;
                        h -= w;
                    } else {
                        self.free.insert(Slot::new(x, y, h));
                        x += h;
                        w -= h;
                    }
                }
            }
        }

        self.extent.cover(square.x, square.y, size);
        square
    }
}
