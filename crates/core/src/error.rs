//! Error types for the Mondrian layout engine.

use thiserror::Error;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out a block.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A parcel was requested that cannot fit the grid at any position.
    #[error("Parcel of side {size} exceeds grid width {width}")]
    OversizedParcel {
        /// Requested square side length.
        size: usize,
        /// Configured grid width.
        width: usize,
    },
}
