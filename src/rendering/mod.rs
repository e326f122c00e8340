//! # Rendering Module
//!
//! Everything between voxel data and a renderer's buffers: the atlas layout
//! used for texture coordinates and the per-cell mesh builder. Nothing here
//! talks to a GPU; the output is plain arrays the caller uploads itself.

pub mod atlas;
pub mod meshing;
