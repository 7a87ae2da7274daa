//! Per-block layout orchestration.
//!
//! Converts a block's ordered transaction magnitudes into parcel sizes,
//! derives the grid width from the block weight and packs every parcel in
//! transaction order on a fresh packer. Each block owns an independent
//! packer instance; blocks may be laid out in parallel, transactions within
//! a block never.

use rayon::prelude::*;

use mondrian_core::{size_class, Extent, Placement, Result};

use crate::packer::MondrianPacker;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The finished layout of one block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockLayout {
    /// One placement per transaction, in transaction order.
    pub parcels: Vec<Placement>,
    /// Grid width the block was packed against.
    pub width: usize,
    /// Final bounding extent of all placements.
    pub extent: Extent,
}

impl BlockLayout {
    /// Returns the number of packed parcels.
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Fraction of the bounding extent covered by parcels (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let area = self.extent.area();
        if area == 0 {
            return 0.0;
        }
        let covered: usize = self.parcels.iter().map(|p| p.size * p.size).sum();
        covered as f64 / area as f64
    }
}

/// Derives the grid width for a set of parcel sizes.
///
/// The block weight is the total parcel area; the grid is the smallest
/// square holding that weight. Since the width is at least the largest
/// single side, the packer's oversize rejection can never trigger from
/// here.
pub fn grid_width(sizes: &[usize]) -> usize {
    let weight: usize = sizes.iter().map(|&s| s * s).sum();
    (weight as f64).sqrt().ceil() as usize
}

/// Packs pre-computed parcel sizes in order onto a fresh grid.
pub fn layout_sizes(sizes: &[usize]) -> Result<BlockLayout> {
    if sizes.is_empty() {
        return Ok(BlockLayout {
            parcels: Vec::new(),
            width: 0,
            extent: Extent::default(),
        });
    }

    let width = grid_width(sizes);
    log::debug!("laying out {} parcels on a width-{} grid", sizes.len(), width);

    let mut packer = MondrianPacker::new(width)?;
    let parcels = sizes
        .iter()
        .map(|&size| packer.place(size))
        .collect::<Result<Vec<_>>>()?;

    Ok(BlockLayout {
        parcels,
        width,
        extent: packer.extent(),
    })
}

/// Lays out one block from its ordered transaction values.
///
/// Values are in smallest-denomination integer units and must keep the
/// block's native transaction order: reordering changes the layout.
pub fn layout_block(values: &[u64]) -> Result<BlockLayout> {
    let sizes: Vec<usize> = values.iter().map(|&v| size_class(v)).collect();
    layout_sizes(&sizes)
}

/// Lays out independent blocks in parallel.
///
/// Each block gets its own packer, so this changes nothing about any single
/// block's deterministic result.
pub fn layout_blocks(blocks: &[Vec<u64>]) -> Vec<Result<BlockLayout>> {
    blocks
        .par_iter()
        .map(|values| layout_block(values))
        .collect()
}
