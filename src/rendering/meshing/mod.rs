//! Mesh generation for voxel cells.
//!
//! Converts the contents of one cell into a triangle mesh by face culling:
//! every solid voxel contributes one quad for each side whose neighbour is
//! air. Neighbours are read through the world, so a face on the edge of a
//! cell is hidden by a solid voxel in the adjacent cell just as it would be by
//! one in the same cell.
//!
//! Coplanar faces are not merged. Each exposed voxel face is its own quad,
//! which keeps vertex counts predictable (24 vertices for a lone voxel).
//!
//! # Usage
//! ```
//! use cgmath::Point3;
//! use voxel_world::{VoxelWorld, WorldConfig};
//!
//! let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
//! world.set_voxel(Point3::new(5, 5, 5), 1);
//! let cell = world.compute_cell_id(Point3::new(5, 5, 5));
//! let mesh = world.generate_geometry_data_for_cell(cell);
//! assert_eq!(mesh.face_count(), 6);
//! ```

mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;

use cgmath::{EuclideanSpace, Point3};
use log::debug;
use web_time::Instant;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::{is_solid, AIR};
use crate::voxels::cell::CellId;
use crate::voxels::world::VoxelWorld;

/// Builds the face-culled mesh for the cell `cell_id`.
///
/// Voxels are visited in y, z, x order and faces in [`BlockSide::all`] order,
/// so the output is identical for identical voxel contents. An unallocated or
/// empty cell yields empty buffers.
pub fn generate_cell_mesh(world: &VoxelWorld, cell_id: CellId) -> MeshData {
    let mut mesh = MeshData::new(cell_id);
    let Some(cell) = world.cell(cell_id) else {
        return mesh;
    };

    let start = Instant::now();
    let origin = world.cell_origin(cell_id);

    for (local, voxel_type) in cell.iter_solid() {
        let local = Point3::new(local.x as i32, local.y as i32, local.z as i32);
        let world_position = origin + local.to_vec();

        for side in BlockSide::all() {
            let neighbour = side
                .neighbour(world_position)
                .map_or(AIR, |position| world.get_voxel(position));
            if is_solid(neighbour) {
                continue;
            }
            mesh.add_face(&Face::new(local, voxel_type, side), world.atlas());
        }
    }

    debug!(
        "Meshed cell {}: {} faces in {:?}",
        cell_id,
        mesh.face_count(),
        start.elapsed()
    );
    mesh
}
