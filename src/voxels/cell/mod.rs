//! # Cell Module
//!
//! This module provides the `Cell` struct, a dense cube of voxel type ids
//! covering `cell_size³` voxels, and `CellId`, the key a world uses to find
//! the cell that owns a voxel.
//!
//! ## Storage
//!
//! Each cell keeps two views of its contents:
//! - `voxels`: one [`VoxelTypeId`] per position, zero (air) initialised
//! - `solid_array`: a bit vector with one bit per position, set where the voxel is not air
//!
//! Both are laid out with the same local offset, `y * size² + z * size + x`,
//! so walking the set bits of `solid_array` visits solid voxels in y, z, x
//! order without touching air.

use std::cmp::Ordering;
use std::fmt;

use bitvec::prelude::BitVec;
use cgmath::Point3;

use super::block::{is_solid, VoxelTypeId, AIR};

pub mod cell_iteration;

use cell_iteration::CellVoxelIterator;

/// Identifies a cell by its cell coordinate (voxel coordinate floor-divided by the cell size).
///
/// Two voxels share a `CellId` exactly when they fall in the same cell. The
/// id displays as `x,y,z`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    /// Cell coordinate along X
    pub x: i32,
    /// Cell coordinate along Y
    pub y: i32,
    /// Cell coordinate along Z
    pub z: i32,
}

impl CellId {
    /// Creates an id from a cell coordinate.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        CellId { x, y, z }
    }

    /// The cell coordinate as a point.
    pub fn coord(&self) -> Point3<i32> {
        Point3::new(self.x, self.y, self.z)
    }
}

impl From<Point3<i32>> for CellId {
    fn from(coord: Point3<i32>) -> Self {
        CellId::new(coord.x, coord.y, coord.z)
    }
}

impl Ord for CellId {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.z).cmp(&(other.x, other.y, other.z))
    }
}

impl PartialOrd for CellId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A dense `cell_size³` block of voxels.
///
/// Cells are created by the world on the first non-air write into their
/// range and are never freed. Local coordinates run from `0` to
/// `cell_size - 1` on each axis.
pub struct Cell {
    /// The cell this storage belongs to
    id: CellId,
    /// Voxels per edge
    size: usize,
    /// One type id per local position
    voxels: Vec<VoxelTypeId>,
    /// One bit per local position, set where the voxel is solid
    solid_array: BitVec,
}

impl Cell {
    /// Creates a new cell filled with air.
    ///
    /// # Arguments
    /// * `id` - The cell coordinate of the new cell
    /// * `size` - Voxels per cell edge
    pub fn new(id: CellId, size: usize) -> Self {
        let volume = size * size * size;
        Cell {
            id,
            size,
            voxels: vec![AIR; volume],
            solid_array: BitVec::repeat(false, volume),
        }
    }

    /// The id of this cell.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Voxels per cell edge.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the voxel type at the given local coordinates.
    ///
    /// # Panics
    /// Panics if any coordinate is `>= size`.
    pub fn get(&self, local: Point3<usize>) -> VoxelTypeId {
        self.voxels[self.index(local)]
    }

    /// Sets the voxel type at the given local coordinates.
    ///
    /// # Panics
    /// Panics if any coordinate is `>= size`.
    pub fn set(&mut self, local: Point3<usize>, voxel_type: VoxelTypeId) {
        let index = self.index(local);
        self.voxels[index] = voxel_type;
        self.solid_array.set(index, is_solid(voxel_type));
    }

    /// Returns `true` if no voxel in the cell is solid.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Number of solid voxels in the cell.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Iterates over every solid voxel in storage order (y, then z, then x).
    pub fn iter_solid(&self) -> CellVoxelIterator<'_> {
        CellVoxelIterator::new(self)
    }

    fn index(&self, local: Point3<usize>) -> usize {
        debug_assert!(local.x < self.size && local.y < self.size && local.z < self.size);
        local.y * self.size * self.size + local.z * self.size + local.x
    }

    fn coords(&self, index: usize) -> Point3<usize> {
        let x = index % self.size;
        let z = (index / self.size) % self.size;
        let y = index / (self.size * self.size);
        Point3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_all_air() {
        let cell = Cell::new(CellId::new(0, 0, 0), 4);
        assert!(cell.is_empty());
        assert_eq!(cell.solid_count(), 0);
        assert_eq!(cell.get(Point3::new(3, 3, 3)), AIR);
    }

    #[test]
    fn set_tracks_solid_bits() {
        let mut cell = Cell::new(CellId::new(1, -1, 0), 4);
        cell.set(Point3::new(1, 2, 3), 7);
        assert_eq!(cell.get(Point3::new(1, 2, 3)), 7);
        assert_eq!(cell.solid_count(), 1);

        cell.set(Point3::new(1, 2, 3), AIR);
        assert!(cell.is_empty());
    }

    #[test]
    fn index_and_coords_agree() {
        let cell = Cell::new(CellId::new(0, 0, 0), 5);
        let local = Point3::new(4, 1, 3);
        assert_eq!(cell.coords(cell.index(local)), local);
    }

    #[test]
    fn cell_id_displays_as_comma_separated_coordinates() {
        assert_eq!(CellId::new(-1, 0, 12).to_string(), "-1,0,12");
    }

    #[test]
    fn cell_ids_order_by_x_then_y_then_z() {
        let mut ids = vec![
            CellId::new(1, 0, 0),
            CellId::new(0, 1, 0),
            CellId::new(0, 0, 1),
            CellId::new(-1, 5, 5),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                CellId::new(-1, 5, 5),
                CellId::new(0, 0, 1),
                CellId::new(0, 1, 0),
                CellId::new(1, 0, 0),
            ]
        );
    }
}
