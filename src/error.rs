//! # Error Module
//!
//! Errors reported by the voxel world. Runtime voxel operations never fail;
//! every variant here comes from building a world out of a bad configuration
//! or from reading a configuration file.

use thiserror::Error;

/// The error type for world construction and configuration loading.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// The cell edge length is zero, or a cell that large cannot be stored or meshed.
    #[error("invalid cell size {0}: must be positive and small enough to store and mesh one cell")]
    InvalidCellSize(u32),

    /// One of the texture atlas dimensions is unusable.
    #[error("invalid atlas {field} = {value}")]
    InvalidAtlas {
        /// Name of the offending configuration field
        field: &'static str,
        /// The rejected value
        value: u32,
    },

    /// The texel inset is negative, non-finite, or would collapse a tile.
    #[error("invalid texel inset {0}: must be finite, non-negative and below half a tile")]
    InvalidTexelInset(f32),

    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for a `WorldConfig`.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
