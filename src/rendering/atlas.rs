//! Texture atlas layout for voxel faces.
//!
//! The atlas is a single image of square tiles. Voxel type `id` uses tile
//! column `id - 1` (air has no tile), and each face picks a row: sides use
//! row 0, bottoms row 1 and tops row 2. Row 0 is the top of the image, while
//! V grows upward, hence the `1 - ...` in the V coordinate.

use crate::config::WorldConfig;
use crate::voxels::block::VoxelTypeId;

/// Pixel layout of the shared tile atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileAtlas {
    tile_size: f32,
    width: f32,
    height: f32,
    texel_inset: f32,
}

impl TileAtlas {
    /// Builds the atlas layout from an already validated configuration.
    pub fn from_config(config: &WorldConfig) -> Self {
        TileAtlas {
            tile_size: config.tile_size as f32,
            width: config.tile_texture_width as f32,
            height: config.tile_texture_height as f32,
            texel_inset: config.texel_inset,
        }
    }

    /// Number of whole tiles across the atlas.
    pub fn columns(&self) -> u32 {
        (self.width / self.tile_size) as u32
    }

    /// Number of whole tiles down the atlas.
    pub fn rows(&self) -> u32 {
        (self.height / self.tile_size) as u32
    }

    /// Computes the UV of one tile corner.
    ///
    /// # Arguments
    /// * `voxel_type` - A solid voxel type; selects the tile column
    /// * `row` - The tile row chosen by the face being textured
    /// * `corner` - Which tile corner, `[0, 0]` bottom-left to `[1, 1]` top-right
    ///
    /// Each corner is pulled `texel_inset` pixels toward the tile's interior so
    /// that nearest-neighbour sampling at a tile edge never reads the adjacent
    /// tile. Type ids are not checked, so ids past the last column produce
    /// coordinates outside `[0, 1]`.
    pub fn tile_uv(&self, voxel_type: VoxelTypeId, row: u32, corner: [u32; 2]) -> [f32; 2] {
        let column = f32::from(voxel_type) - 1.0;

        let u_pixels = if corner[0] == 0 {
            column * self.tile_size + self.texel_inset
        } else {
            (column + 1.0) * self.tile_size - self.texel_inset
        };

        // Measured down from the top edge of the image.
        let v_pixels = if corner[1] == 0 {
            (row as f32 + 1.0) * self.tile_size - self.texel_inset
        } else {
            row as f32 * self.tile_size + self.texel_inset
        };

        [u_pixels / self.width, 1.0 - v_pixels / self.height]
    }
}
