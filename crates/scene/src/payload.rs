//! Scene payload definitions.
//!
//! The JSON document consumed by the visual front end. Field names follow
//! the wire format exactly (`totalWidth`, `parcelColor`, ...), so the
//! payload can be handed to the transport layer as-is.

use serde::{Deserialize, Serialize};

/// A single 3D box in the scene, one per transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelBox {
    /// Transaction index within the block.
    pub id: usize,

    /// Granted square side on the layout grid.
    pub size: usize,

    /// Box width in scene units.
    pub width: f64,

    /// Box height (platform thickness scaled by side).
    pub height: f64,

    /// Box depth in scene units.
    pub depth: f64,

    /// Scene x coordinate, centered on the grid's centroid.
    pub x: f64,

    /// Scene y coordinate, centered on the grid's centroid.
    pub y: f64,

    /// Scene z coordinate (half the platform lift).
    pub z: f64,
}

/// The complete scene document for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePayload {
    /// Boxes in transaction order.
    pub parcels: Vec<ParcelBox>,

    /// Final bounding grid width.
    pub total_width: usize,

    /// Hex color applied to every parcel.
    pub parcel_color: String,

    /// Height of the visualized block.
    pub block_number: u64,

    /// Number of parcels in the scene.
    pub total_parcels: usize,
}

impl ScenePayload {
    /// Serializes the payload to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
