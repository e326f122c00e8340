//! # Voxel World Core
//!
//! This module contains the voxel storage and query functionality.
//!
//! ## Architecture
//!
//! * **Block**: Voxel type ids and the six voxel faces
//! * **Cell**: Fixed-size dense cubes of voxel type ids
//! * **World**: Sparse map of cells and the voxel get/set entry points
//! * **Raycast**: Grid traversal returning the first solid voxel along a ray
//!
//! ## Data Flow
//!
//! 1. The caller writes voxels through the world, which allocates cells on demand
//! 2. The caller asks the world for the mesh of each cell it wants to draw
//! 3. After an edit, the caller rebuilds the cells reported by `cells_affected_by`
//! 4. Picking goes through `intersect_ray`, which reads the world directly
//!
//! ## Thread Safety
//!
//! There is no internal locking. The world is plain data: share it behind
//! `&` for concurrent reads and serialise writes with `&mut` or a lock owned
//! by the caller.

pub mod block;
pub mod cell;
pub mod raycast;
pub mod world;
