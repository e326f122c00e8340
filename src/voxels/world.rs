//! # World Module
//!
//! This module provides the `VoxelWorld` struct, which owns every allocated
//! cell and is the only entry point for reading and writing voxels.
//!
//! ## Architecture
//!
//! The world uses sparse storage: cells are created on the first non-air
//! write into their range and are kept for the lifetime of the world. Reads
//! from space that was never written return [`AIR`] without allocating.
//!
//! ## Mesh invalidation
//!
//! The world does not cache meshes. A cell's mesh depends on its own voxels
//! and on the voxels of its six face-adjacent cells, so after an edit the
//! caller should rebuild every cell reported by [`VoxelWorld::cells_affected_by`].

use std::collections::HashMap;

use cgmath::Point3;
use log::debug;

use crate::config::WorldConfig;
use crate::error::VoxelError;
use crate::rendering::atlas::TileAtlas;
use crate::rendering::meshing::{generate_cell_mesh, MeshData};

use super::block::block_side::BlockSide;
use super::block::{VoxelTypeId, AIR};
use super::cell::{Cell, CellId};
use super::raycast::{self, RayHit};

/// A sparse voxel world partitioned into cubic cells.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{VoxelWorld, WorldConfig};
///
/// let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
/// world.set_voxel(Point3::new(5, 5, 5), 3);
/// assert_eq!(world.get_voxel(Point3::new(5, 5, 5)), 3);
/// assert_eq!(world.get_voxel(Point3::new(-40, 7, 900)), 0);
/// ```
pub struct VoxelWorld {
    /// The validated construction-time settings.
    config: WorldConfig,
    /// Voxels per cell edge, as a signed value for coordinate arithmetic.
    cell_size: i32,
    /// Texture atlas layout used when building meshes.
    atlas: TileAtlas,
    /// A mapping from cell ids to cell data.
    cells: HashMap<CellId, Cell>,
}

impl VoxelWorld {
    /// Creates a new, empty world.
    ///
    /// # Errors
    /// Returns the first problem found by [`WorldConfig::validate`].
    pub fn new(config: WorldConfig) -> Result<Self, VoxelError> {
        config.validate()?;
        // `validate` bounds the edge far below i32::MAX.
        let cell_size = config.cell_size as i32;
        let atlas = TileAtlas::from_config(&config);

        Ok(VoxelWorld {
            config,
            cell_size,
            atlas,
            cells: HashMap::new(),
        })
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Voxels per cell edge.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// The atlas layout used for mesh UVs.
    pub fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    /// Computes the cell coordinate owning a voxel (floor division per axis).
    pub fn compute_cell_coord(&self, position: Point3<i32>) -> Point3<i32> {
        Point3::new(
            position.x.div_euclid(self.cell_size),
            position.y.div_euclid(self.cell_size),
            position.z.div_euclid(self.cell_size),
        )
    }

    /// Computes the id of the cell owning a voxel.
    ///
    /// Two positions map to the same id exactly when they lie in the same cell.
    pub fn compute_cell_id(&self, position: Point3<i32>) -> CellId {
        CellId::from(self.compute_cell_coord(position))
    }

    /// World position of a cell's minimum corner.
    ///
    /// Mesh positions are relative to this point.
    pub fn cell_origin(&self, cell: CellId) -> Point3<i32> {
        Point3::new(
            cell.x * self.cell_size,
            cell.y * self.cell_size,
            cell.z * self.cell_size,
        )
    }

    /// Gets the voxel type at a world position.
    ///
    /// Returns [`AIR`] if the owning cell has never been allocated.
    pub fn get_voxel(&self, position: Point3<i32>) -> VoxelTypeId {
        match self.cells.get(&self.compute_cell_id(position)) {
            Some(cell) => cell.get(self.local_position(position)),
            None => AIR,
        }
    }

    /// Sets the voxel type at a world position.
    ///
    /// The owning cell is allocated if needed, except when writing [`AIR`]:
    /// clearing a voxel in an unallocated cell changes nothing and allocates nothing.
    /// Type ids are not checked against any palette.
    pub fn set_voxel(&mut self, position: Point3<i32>, voxel_type: VoxelTypeId) {
        let cell_id = self.compute_cell_id(position);
        let local = self.local_position(position);

        if let Some(cell) = self.cells.get_mut(&cell_id) {
            cell.set(local, voxel_type);
            return;
        }

        if voxel_type == AIR {
            return;
        }

        debug!("Allocating cell {}", cell_id);
        let mut cell = Cell::new(cell_id, self.cell_size as usize);
        cell.set(local, voxel_type);
        self.cells.insert(cell_id, cell);
    }

    /// Retrieves the cell with the given id, if it has been allocated.
    pub fn cell(&self, cell: CellId) -> Option<&Cell> {
        self.cells.get(&cell)
    }

    /// Ids of every allocated cell, sorted.
    pub fn cell_ids(&self) -> Vec<CellId> {
        let mut ids: Vec<CellId> = self.cells.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Number of allocated cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Ids of the cells whose meshes depend on the voxel at `position`.
    ///
    /// That is the owning cell plus the cells owning its six face neighbours,
    /// deduplicated, in the order: self, -X, +X, -Y, +Y, -Z, +Z.
    pub fn cells_affected_by(&self, position: Point3<i32>) -> Vec<CellId> {
        // Neighbours past the edge of the coordinate range do not exist.
        let positions = std::iter::once(position)
            .chain(BlockSide::all().into_iter().filter_map(|side| side.neighbour(position)));

        let mut affected: Vec<CellId> = Vec::with_capacity(7);
        for neighbour in positions {
            let cell_id = self.compute_cell_id(neighbour);
            if !affected.contains(&cell_id) {
                affected.push(cell_id);
            }
        }
        affected
    }

    /// Builds the face-culled mesh for one cell.
    ///
    /// See [`generate_cell_mesh`].
    pub fn generate_geometry_data_for_cell(&self, cell: CellId) -> MeshData {
        generate_cell_mesh(self, cell)
    }

    /// Finds the first solid voxel along the segment from `start` to `end`.
    ///
    /// See [`raycast::intersect_ray`].
    pub fn intersect_ray(&self, start: Point3<f32>, end: Point3<f32>) -> Option<RayHit> {
        raycast::intersect_ray(self, start, end)
    }

    fn local_position(&self, position: Point3<i32>) -> Point3<usize> {
        Point3::new(
            position.x.rem_euclid(self.cell_size) as usize,
            position.y.rem_euclid(self.cell_size) as usize,
            position.z.rem_euclid(self.cell_size) as usize,
        )
    }
}
