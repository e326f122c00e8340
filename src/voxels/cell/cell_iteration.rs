//! # Cell Iteration Module
//!
//! This module provides an iterator over the solid voxels of a cell.
//!
//! The iterator walks the set bits of the cell's `solid_array`, so air is
//! skipped without reading the voxel array. Positions come out in storage
//! order (y, then z, then x, each ascending), which is also the order the
//! mesher emits faces in.

use bitvec::order::Lsb0;
use bitvec::slice::IterOnes;
use cgmath::Point3;

use crate::voxels::block::VoxelTypeId;

use super::Cell;

/// An iterator over all solid voxels in a cell.
///
/// Yields `(local_position, voxel_type)` pairs.
pub struct CellVoxelIterator<'a> {
    /// Reference to the cell being iterated over
    cell_ref: &'a Cell,
    /// Remaining set bits of the solid array
    solid_offsets: IterOnes<'a, usize, Lsb0>,
}

impl<'a> CellVoxelIterator<'a> {
    /// Creates a new iterator positioned before the first solid voxel of `cell_ref`.
    pub fn new(cell_ref: &'a Cell) -> Self {
        CellVoxelIterator {
            cell_ref,
            solid_offsets: cell_ref.solid_array.iter_ones(),
        }
    }
}

impl Iterator for CellVoxelIterator<'_> {
    type Item = (Point3<usize>, VoxelTypeId);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.solid_offsets.next()?;
        Some((self.cell_ref.coords(index), self.cell_ref.voxels[index]))
    }
}
