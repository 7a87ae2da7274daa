//! # Mondrian Core
//!
//! Core types for the Mondrian block layout engine.
//!
//! This crate provides the foundational pieces shared by the packer and the
//! scene projector:
//!
//! - **Slot / FreeSpaceIndex**: per-row registry of free-space descriptors,
//!   the only structures through which free space is ever mutated
//! - **ParcelSizer**: pure bucketing of a monetary magnitude into a square
//!   side length
//! - **Placement / Extent**: immutable placement records and the monotone
//!   bounding extent
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod freespace;
pub mod placement;
pub mod sizer;
pub mod slot;

// Re-exports
pub use error::{Error, Result};
pub use freespace::{FreeSpaceIndex, Row};
pub use placement::Placement;
pub use sizer::size_class;
pub use slot::{Extent, Slot};
