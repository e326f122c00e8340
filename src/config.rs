//! # Config Module
//!
//! Construction-time settings for a [`VoxelWorld`](crate::voxels::world::VoxelWorld).
//!
//! The configuration is immutable once a world has been built from it. Every
//! field has a default taken from the voxel geometry demo scene: 32 voxel
//! cells and a 256x64 pixel atlas of 16 pixel tiles.
//!
//! ## Loading
//!
//! ```no_run
//! use voxel_world::config::WorldConfig;
//!
//! let config = WorldConfig::load("world.json").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VoxelError;
use crate::rendering::meshing::VERTICES_PER_FACE;
use crate::voxels::block::VoxelTypeId;

/// Faces a single voxel can expose.
const MAX_FACES_PER_VOXEL: usize = 6;

/// Default number of voxels along a cell edge.
pub const DEFAULT_CELL_SIZE: u32 = 32;
/// Default edge length of one atlas tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;
/// Default atlas width in pixels.
pub const DEFAULT_TILE_TEXTURE_WIDTH: u32 = 256;
/// Default atlas height in pixels.
pub const DEFAULT_TILE_TEXTURE_HEIGHT: u32 = 64;
/// Default inset, in pixels, applied to every tile corner.
pub const DEFAULT_TEXEL_INSET: f32 = 0.01;

/// Settings describing the cell layout and the shared texture atlas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Voxels per cell edge
    pub cell_size: u32,
    /// Edge length of a square atlas tile, in pixels
    pub tile_size: u32,
    /// Atlas width, in pixels
    pub tile_texture_width: u32,
    /// Atlas height, in pixels
    pub tile_texture_height: u32,
    /// Distance in pixels that tile corners are pulled toward the tile center
    pub texel_inset: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            tile_texture_width: DEFAULT_TILE_TEXTURE_WIDTH,
            tile_texture_height: DEFAULT_TILE_TEXTURE_HEIGHT,
            texel_inset: DEFAULT_TEXEL_INSET,
        }
    }
}

impl WorldConfig {
    /// Creates a configuration with the given cell size and default atlas layout.
    pub fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size,
            ..Self::default()
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults. The result is not validated; that
    /// happens when a world is built from it.
    pub fn from_json_str(json: &str) -> Result<Self, VoxelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VoxelError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Checks that every dimension is usable.
    ///
    /// # Errors
    /// - [`VoxelError::InvalidCellSize`] if `cell_size` is zero or `cell_size³` overflows
    /// - [`VoxelError::InvalidAtlas`] if an atlas dimension is zero or a tile is larger than the atlas
    /// - [`VoxelError::InvalidTexelInset`] if the inset is negative, non-finite or at least half a tile
    pub fn validate(&self) -> Result<(), VoxelError> {
        if self.cell_volume().is_none() {
            return Err(VoxelError::InvalidCellSize(self.cell_size));
        }

        for (field, value) in [
            ("tile_size", self.tile_size),
            ("tile_texture_width", self.tile_texture_width),
            ("tile_texture_height", self.tile_texture_height),
        ] {
            if value == 0 {
                return Err(VoxelError::InvalidAtlas { field, value });
            }
        }

        if self.tile_size > self.tile_texture_width || self.tile_size > self.tile_texture_height {
            return Err(VoxelError::InvalidAtlas {
                field: "tile_size",
                value: self.tile_size,
            });
        }

        let half_tile = self.tile_size as f32 / 2.0;
        if !self.texel_inset.is_finite() || self.texel_inset < 0.0 || self.texel_inset >= half_tile
        {
            return Err(VoxelError::InvalidTexelInset(self.texel_inset));
        }

        Ok(())
    }

    /// Number of voxels in one cell, or `None` if the cell size is unusable.
    ///
    /// A cell is unusable when its storage would not fit in one allocation or
    /// when a fully exposed mesh of it would need vertex indices past `u32::MAX`.
    pub fn cell_volume(&self) -> Option<usize> {
        if self.cell_size == 0 {
            return None;
        }
        let edge = usize::try_from(self.cell_size).ok()?;
        // Local coordinates are handled as i32, so the edge must fit there too.
        i32::try_from(self.cell_size).ok()?;
        let volume = edge.checked_mul(edge)?.checked_mul(edge)?;

        let bytes = volume.checked_mul(std::mem::size_of::<VoxelTypeId>())?;
        if bytes > isize::MAX as usize {
            return None;
        }
        let worst_case_vertices =
            volume.checked_mul(MAX_FACES_PER_VOXEL * VERTICES_PER_FACE)?;
        if worst_case_vertices > u32::MAX as usize {
            return None;
        }
        Some(volume)
    }
}
