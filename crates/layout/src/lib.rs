//! # Mondrian Layout
//!
//! First-fit square packing for the Mondrian block layout engine.
//!
//! [`MondrianPacker`] places one square per transaction onto an implicit
//! grid, reusing leftover free space tracked exactly by the core
//! free-space index. [`block`] wraps the packer with per-block
//! orchestration: value bucketing, grid sizing and an optional parallel
//! helper across independent blocks.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod block;
pub mod packer;

// Re-exports
pub use block::{grid_width, layout_block, layout_blocks, layout_sizes, BlockLayout};
pub use packer::MondrianPacker;
