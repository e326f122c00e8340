//! # Block Side Module
//!
//! This module defines the six faces of a voxel and the geometry attached to
//! each one: the direction of the neighbour that can hide it, the unit-cube
//! corners of its quad, and the atlas row its texture is taken from.

use cgmath::{Point3, Vector3};

/// Represents the six possible faces of a voxel.
///
/// The declaration order is the order faces are emitted by the mesher, so it
/// is part of the mesh output format and must not be reordered.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    Left = 0,

    /// The right face (facing positive X)
    Right = 1,

    /// The bottom face (facing negative Y)
    Bottom = 2,

    /// The top face (facing positive Y)
    Top = 3,

    /// The back face (facing negative Z)
    Back = 4,

    /// The front face (facing positive Z)
    Front = 5,
}

/// One corner of a face quad.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceCorner {
    /// Corner offset from the voxel's minimum corner, each component 0 or 1
    pub position: [i32; 3],
    /// Corner of the atlas tile mapped onto this vertex, each component 0 or 1
    pub uv: [u32; 2],
}

const fn corner(position: [i32; 3], uv: [u32; 2]) -> FaceCorner {
    FaceCorner { position, uv }
}

// Vertices 0,1,2 and 2,1,3 wind counter-clockwise seen from outside the cube.
const LEFT_CORNERS: [FaceCorner; 4] = [
    corner([0, 1, 0], [0, 1]),
    corner([0, 0, 0], [0, 0]),
    corner([0, 1, 1], [1, 1]),
    corner([0, 0, 1], [1, 0]),
];
const RIGHT_CORNERS: [FaceCorner; 4] = [
    corner([1, 1, 1], [0, 1]),
    corner([1, 0, 1], [0, 0]),
    corner([1, 1, 0], [1, 1]),
    corner([1, 0, 0], [1, 0]),
];
const BOTTOM_CORNERS: [FaceCorner; 4] = [
    corner([1, 0, 1], [1, 0]),
    corner([0, 0, 1], [0, 0]),
    corner([1, 0, 0], [1, 1]),
    corner([0, 0, 0], [0, 1]),
];
const TOP_CORNERS: [FaceCorner; 4] = [
    corner([0, 1, 1], [1, 1]),
    corner([1, 1, 1], [0, 1]),
    corner([0, 1, 0], [1, 0]),
    corner([1, 1, 0], [0, 0]),
];
const BACK_CORNERS: [FaceCorner; 4] = [
    corner([1, 0, 0], [0, 0]),
    corner([0, 0, 0], [1, 0]),
    corner([1, 1, 0], [0, 1]),
    corner([0, 1, 0], [1, 1]),
];
const FRONT_CORNERS: [FaceCorner; 4] = [
    corner([0, 0, 1], [0, 0]),
    corner([1, 0, 1], [1, 0]),
    corner([0, 1, 1], [0, 1]),
    corner([1, 1, 1], [1, 1]),
];

impl BlockSide {
    /// Returns an array containing all six faces in emission order.
    ///
    /// The order is: [Left, Right, Bottom, Top, Back, Front]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::Left,
            BlockSide::Right,
            BlockSide::Bottom,
            BlockSide::Top,
            BlockSide::Back,
            BlockSide::Front,
        ]
    }

    /// Offset from a voxel to the neighbour that shares this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::Left => Vector3::new(-1, 0, 0),
            BlockSide::Right => Vector3::new(1, 0, 0),
            BlockSide::Bottom => Vector3::new(0, -1, 0),
            BlockSide::Top => Vector3::new(0, 1, 0),
            BlockSide::Back => Vector3::new(0, 0, -1),
            BlockSide::Front => Vector3::new(0, 0, 1),
        }
    }

    /// The voxel sharing this face with `position`, or `None` past the edge of the coordinate range.
    pub fn neighbour(self, position: Point3<i32>) -> Option<Point3<i32>> {
        let offset = self.offset();
        Some(Point3::new(
            position.x.checked_add(offset.x)?,
            position.y.checked_add(offset.y)?,
            position.z.checked_add(offset.z)?,
        ))
    }

    /// Outward unit normal of this face.
    pub fn normal(self) -> [f32; 3] {
        let offset = self.offset();
        [offset.x as f32, offset.y as f32, offset.z as f32]
    }

    /// The face whose normal is `normal`, if it is one of the six axis unit vectors.
    pub fn from_normal(normal: Vector3<i32>) -> Option<BlockSide> {
        BlockSide::all()
            .into_iter()
            .find(|side| side.offset() == normal)
    }

    /// Atlas row holding this face's texture: sides use row 0, bottoms row 1, tops row 2.
    pub fn uv_row(self) -> u32 {
        match self {
            BlockSide::Bottom => 1,
            BlockSide::Top => 2,
            BlockSide::Left | BlockSide::Right | BlockSide::Back | BlockSide::Front => 0,
        }
    }

    /// The four corners of this face's quad.
    pub fn corners(self) -> &'static [FaceCorner; 4] {
        match self {
            BlockSide::Left => &LEFT_CORNERS,
            BlockSide::Right => &RIGHT_CORNERS,
            BlockSide::Bottom => &BOTTOM_CORNERS,
            BlockSide::Top => &TOP_CORNERS,
            BlockSide::Back => &BACK_CORNERS,
            BlockSide::Front => &FRONT_CORNERS,
        }
    }
}
