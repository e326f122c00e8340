use cgmath::Point3;

use crate::rendering::atlas::TileAtlas;
use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::VoxelTypeId;

/// A single exposed quad of a voxel.
///
/// A face is defined by the voxel it belongs to and the side it covers. Its
/// four corners come from [`BlockSide::corners`], offset by the voxel's
/// position within the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Minimum corner of the voxel, in cell-local coordinates
    pub local: Point3<i32>,
    /// The voxel type, used for texture lookup
    pub voxel_type: VoxelTypeId,
    /// Which side of the voxel this face covers
    pub side: BlockSide,
}

impl Face {
    /// Creates a new face for the voxel at cell-local coordinates `local`.
    pub fn new(local: Point3<i32>, voxel_type: VoxelTypeId, side: BlockSide) -> Self {
        Face {
            local,
            voxel_type,
            side,
        }
    }

    /// Cell-local positions of the four corners, in vertex order.
    pub fn positions(&self) -> [[f32; 3]; 4] {
        self.side.corners().map(|corner| {
            [
                (self.local.x + corner.position[0]) as f32,
                (self.local.y + corner.position[1]) as f32,
                (self.local.z + corner.position[2]) as f32,
            ]
        })
    }

    /// Atlas UVs of the four corners, in vertex order.
    pub fn uvs(&self, atlas: &TileAtlas) -> [[f32; 2]; 4] {
        let row = self.side.uv_row();
        self.side
            .corners()
            .map(|corner| atlas.tile_uv(self.voxel_type, row, corner.uv))
    }
}
