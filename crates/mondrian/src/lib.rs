//! # Mondrian
//!
//! Deterministic first-fit square-packing layout engine for blockchain
//! block visualization.
//!
//! One square ("parcel") per transaction, sized by its monetary magnitude,
//! is placed onto an implicit grid in transaction order with no overlaps;
//! leftover free space is tracked exactly and reused by later placements.
//! The finished layout projects into 3D box geometry for a visual scene.
//!
//! ## Quick Start
//!
//! ```rust
//! use mondrian::layout::layout_block;
//! use mondrian::scene::{project, SceneConfig};
//!
//! // Ordered transaction values (smallest-denomination units).
//! let values = vec![150_000, 50_000_000, 0, 2_500_000];
//!
//! let layout = layout_block(&values)?;
//! let payload = project(&layout, 840_000, &SceneConfig::default())?;
//! let json = payload.to_json().expect("payload serializes");
//! # assert!(json.contains("totalWidth"));
//! # Ok::<(), mondrian::core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `scene` (default): 3D projection and JSON payload
//! - `serde`: Serialization support for core and layout types

/// Core types: slots, free-space index, sizer, placements.
pub use mondrian_core as core;

/// First-fit packer and per-block orchestration.
pub use mondrian_layout as layout;

/// 3D projection and scene payload.
#[cfg(feature = "scene")]
pub use mondrian_scene as scene;

// Re-export commonly used types at root level
pub use mondrian_core::{size_class, Error, Extent, Placement, Result};
pub use mondrian_layout::{layout_block, layout_blocks, BlockLayout, MondrianPacker};
