//! # Mondrian Scene
//!
//! Projection of finished block layouts into 3D scene geometry and the
//! JSON payload consumed by the visual front end.

pub mod payload;
pub mod projector;

// Re-exports
pub use payload::{ParcelBox, ScenePayload};
pub use projector::{project, SceneConfig, DEFAULT_PARCEL_COLOR};
