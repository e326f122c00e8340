//! # Block Module
//!
//! Voxel type ids and face definitions.
//!
//! A voxel is stored as a bare [`VoxelTypeId`]. The world attaches no meaning
//! to ids beyond `AIR`; mapping an id to a texture tile is done by the atlas,
//! and mapping it to gameplay properties is left to the caller.

pub mod block_side;

/// The underlying integer type used to represent voxel types in memory.
pub type VoxelTypeId = u8;

/// The empty voxel. Unallocated space reads as `AIR`.
pub const AIR: VoxelTypeId = 0;

/// Returns `true` if the voxel type is anything other than [`AIR`].
#[inline]
pub fn is_solid(voxel_type: VoxelTypeId) -> bool {
    voxel_type != AIR
}
