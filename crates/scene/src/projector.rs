//! Projection of a finished layout into 3D scene geometry.

use mondrian_core::{Error, Result};
use mondrian_layout::BlockLayout;

use crate::payload::{ParcelBox, ScenePayload};

/// Default parcel color (the familiar orange).
pub const DEFAULT_PARCEL_COLOR: &str = "#f7931a";

/// Fraction of each grid cell left as inter-parcel gap.
const GAP_FACTOR: f64 = 0.9;

/// Platform thickness per unit of parcel side, before scaling.
const THICKNESS_FACTOR: f64 = 0.1;

/// Margin subtracted per unit of parcel side, before scaling.
const MARGIN_FACTOR: f64 = 0.5;

/// Configuration for scene projection.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Linear size multiplier applied to every scene dimension.
    pub scale: f64,

    /// Hex color applied to every parcel.
    pub parcel_color: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            parcel_color: DEFAULT_PARCEL_COLOR.to_string(),
        }
    }
}

impl SceneConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the linear scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the parcel color.
    pub fn with_parcel_color(mut self, color: impl Into<String>) -> Self {
        self.parcel_color = color.into();
        self
    }
}

/// Maps a finished block layout into the scene payload.
///
/// Pure and deterministic: every box is sized from its granted side, shrunk
/// by the 10% inter-parcel gap, and centered on the grid's centroid with a
/// per-side margin term. The z lift is half the unscaled platform
/// thickness, matching the reference scene.
///
/// # Errors
///
/// `Error::InvalidConfig` if the scale is not a positive finite number.
pub fn project(layout: &BlockLayout, block_number: u64, config: &SceneConfig) -> Result<ScenePayload> {
    if !config.scale.is_finite() || config.scale <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "scene scale must be positive and finite, got {}",
            config.scale
        )));
    }

    let scale = config.scale;
    let thickness = THICKNESS_FACTOR * scale;
    let margin = MARGIN_FACTOR * scale;
    let half_grid = layout.width as f64 / 2.0;

    let parcels = layout
        .parcels
        .iter()
        .enumerate()
        .map(|(id, p)| {
            let side = p.size as f64;
            ParcelBox {
                id,
                size: p.size,
                width: side * scale * GAP_FACTOR,
                height: thickness * side,
                depth: side * scale * GAP_FACTOR,
                x: (p.x as f64 + side - half_grid) * scale - margin * side,
                y: (p.y as f64 + side - half_grid) * scale - margin * side,
                z: THICKNESS_FACTOR * side / 2.0,
            }
        })
        .collect();

    Ok(ScenePayload {
        parcels,
        total_width: layout.width,
        parcel_color: config.parcel_color.clone(),
        block_number,
        total_parcels: layout.parcel_count(),
    })
}
