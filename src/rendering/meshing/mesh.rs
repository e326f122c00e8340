//! Mesh buffers produced for one cell.
//!
//! The layout is four flat arrays ready to be copied into a vertex/index
//! buffer pair: three floats per position, three per normal, two per UV and
//! six `u32` indices per face.

use crate::rendering::atlas::TileAtlas;
use crate::voxels::cell::CellId;

use super::face::Face;

/// Number of vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 4;
/// Number of indices emitted per face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// Geometry for one cell.
///
/// Positions are relative to the cell origin
/// ([`VoxelWorld::cell_origin`](crate::voxels::world::VoxelWorld::cell_origin)),
/// so the renderer places the mesh with a translation instead of baking world
/// coordinates into every vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// The cell this geometry was built for
    pub cell: CellId,
    /// Vertex positions, three floats per vertex
    pub positions: Vec<f32>,
    /// Vertex normals, three floats per vertex, shared by the four vertices of a face
    pub normals: Vec<f32>,
    /// Atlas texture coordinates, two floats per vertex
    pub uvs: Vec<f32>,
    /// Triangle list indices, six per face
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates empty buffers for `cell`.
    pub fn new(cell: CellId) -> Self {
        MeshData {
            cell,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns `true` if no face was emitted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of vertices in the buffers.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of quads in the buffers.
    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }

    /// Number of triangles in the buffers.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends the four vertices and six indices of `face`.
    pub fn add_face(&mut self, face: &Face, atlas: &TileAtlas) {
        let first_vertex = self.vertex_count() as u32;
        let normal = face.side.normal();

        for (position, uv) in face.positions().iter().zip(face.uvs(atlas).iter()) {
            self.positions.extend_from_slice(position);
            self.normals.extend_from_slice(&normal);
            self.uvs.extend_from_slice(uv);
        }

        self.indices
            .extend_from_slice(&Self::generate_face_indices(first_vertex));
    }

    /// Indices of the two triangles of a face whose first vertex is `first_vertex`.
    ///
    /// The triangles are (0, 1, 2) and (2, 1, 3), matching the corner order of
    /// [`BlockSide::corners`](crate::voxels::block::block_side::BlockSide::corners).
    pub fn generate_face_indices(first_vertex: u32) -> [u32; INDICES_PER_FACE] {
        [
            first_vertex,
            first_vertex + 1,
            first_vertex + 2,
            first_vertex + 2,
            first_vertex + 1,
            first_vertex + 3,
        ]
    }

    /// Position buffer as raw bytes, for upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes, for upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as raw bytes, for upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes, for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
