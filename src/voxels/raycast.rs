//! # Raycast Module
//!
//! Ray/voxel intersection for picking.
//!
//! The traversal is the grid walk of Amanatides and Woo: starting in the voxel
//! that contains the ray origin, it repeatedly steps into whichever neighbour
//! the ray reaches first, so every voxel the segment passes through is
//! visited exactly once and in order. The cost is proportional to the segment
//! length, never to the size of the world.

use cgmath::{InnerSpace, Point3, Vector3};
use log::trace;

use super::block::block_side::BlockSide;
use super::block::{VoxelTypeId, AIR};
use super::world::VoxelWorld;

/// The first solid voxel struck by a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Point where the ray enters the hit voxel
    pub position: Point3<f32>,
    /// Outward normal of the entered face, one of the six axis unit vectors
    pub normal: Vector3<i32>,
    /// Coordinate of the hit voxel
    pub voxel: Point3<i32>,
    /// Type of the hit voxel
    pub voxel_type: VoxelTypeId,
}

impl RayHit {
    /// The voxel to clear when removing what the ray points at.
    pub fn removal_target(&self) -> Point3<i32> {
        self.voxel
    }

    /// The empty voxel just outside the struck face, where a new voxel would be placed.
    pub fn placement_target(&self) -> Point3<i32> {
        self.voxel + self.normal
    }

    /// The face of the hit voxel that the ray entered through.
    pub fn side(&self) -> Option<BlockSide> {
        BlockSide::from_normal(self.normal)
    }
}

/// Walks the voxels crossed by the segment from `start` to `end` and returns the first solid one.
///
/// Coordinates are in voxel units (one world unit per voxel). The voxel
/// containing `start` is never reported: the origin is usually the camera,
/// which sits in empty space. A hit is only reported if the ray enters the
/// voxel at or before `end`.
///
/// Distances are tracked in `f64` and the walk takes at most one step per
/// voxel boundary the segment can cross, so long rays still terminate.
///
/// # Returns
/// - `Some(hit)` for the first solid voxel along the segment
/// - `None` if the segment crosses only air, or if `start == end`
pub fn intersect_ray(world: &VoxelWorld, start: Point3<f32>, end: Point3<f32>) -> Option<RayHit> {
    let origin = widen(start);
    let delta = widen(end) - origin;
    let length = delta.magnitude();
    if !length.is_finite() || length <= 0.0 {
        trace!("Ignoring degenerate ray from {:?} to {:?}", start, end);
        return None;
    }
    let direction = delta / length;

    // Float to int casts saturate, so origins outside the i32 range clamp to its edge.
    let mut voxel = Point3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );

    let mut step = Vector3::new(0, 0, 0);
    // Distance along the ray between two boundaries on each axis.
    let mut t_delta = Vector3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    // Distance along the ray to the next boundary on each axis.
    let mut t_max = Vector3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);

    for axis in 0..3 {
        step[axis] = if direction[axis] > 0.0 { 1 } else { -1 };
        if direction[axis] == 0.0 {
            continue;
        }
        t_delta[axis] = (1.0 / direction[axis]).abs();
        let boundary_distance = if step[axis] > 0 {
            f64::from(voxel[axis]) + 1.0 - origin[axis]
        } else {
            origin[axis] - f64::from(voxel[axis])
        };
        t_max[axis] = t_delta[axis] * boundary_distance;
    }

    // A segment crosses at most one boundary per unit travelled along each axis.
    let max_steps = (delta.x.abs() + delta.y.abs() + delta.z.abs()).ceil() as u64 + 3;

    for _ in 0..max_steps {
        let axis = if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                0
            } else {
                2
            }
        } else if t_max.y < t_max.z {
            1
        } else {
            2
        };

        let t = t_max[axis];
        if t > length {
            break;
        }
        let Some(next) = voxel[axis].checked_add(step[axis]) else {
            trace!("Ray from {:?} to {:?} left the coordinate range", start, end);
            return None;
        };
        voxel[axis] = next;
        t_max[axis] += t_delta[axis];

        let voxel_type = world.get_voxel(voxel);
        if voxel_type != AIR {
            let mut normal = Vector3::new(0, 0, 0);
            normal[axis] = -step[axis];
            let position = origin + direction * t;
            let hit = RayHit {
                position: Point3::new(position.x as f32, position.y as f32, position.z as f32),
                normal,
                voxel,
                voxel_type,
            };
            trace!("Ray hit {:?}", hit);
            return Some(hit);
        }
    }

    trace!("Ray from {:?} to {:?} hit nothing", start, end);
    None
}

fn widen(point: Point3<f32>) -> Point3<f64> {
    Point3::new(f64::from(point.x), f64::from(point.y), f64::from(point.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    fn world_with(voxels: &[(Point3<i32>, VoxelTypeId)]) -> VoxelWorld {
        let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
        for &(position, voxel_type) in voxels {
            world.set_voxel(position, voxel_type);
        }
        world
    }

    fn assert_close(actual: Point3<f32>, expected: Point3<f32>) {
        let error = (actual - expected).magnitude();
        assert!(error < 1e-4, "expected {:?}, got {:?}", expected, actual);
    }

    #[test]
    fn hits_voxel_on_its_near_face() {
        let world = world_with(&[(Point3::new(5, 5, 5), 1)]);
        let hit = intersect_ray(&world, Point3::new(5.0, 5.0, -10.0), Point3::new(5.0, 5.0, 10.0))
            .expect("ray should hit");
        assert_eq!(hit.voxel, Point3::new(5, 5, 5));
        assert_eq!(hit.normal, Vector3::new(0, 0, -1));
        assert_eq!(hit.voxel_type, 1);
        assert_close(hit.position, Point3::new(5.0, 5.0, 5.0));
        assert_eq!(hit.side(), Some(BlockSide::Back));
    }

    #[test]
    fn reversed_ray_hits_the_opposite_face() {
        let world = world_with(&[(Point3::new(5, 5, 5), 2)]);
        let hit = intersect_ray(&world, Point3::new(5.5, 5.5, 10.0), Point3::new(5.5, 5.5, -10.0))
            .expect("ray should hit");
        assert_eq!(hit.voxel, Point3::new(5, 5, 5));
        assert_eq!(hit.normal, Vector3::new(0, 0, 1));
        assert_close(hit.position, Point3::new(5.5, 5.5, 6.0));
    }

    #[test]
    fn empty_space_yields_no_hit() {
        let world = world_with(&[(Point3::new(5, 5, 5), 1)]);
        assert!(intersect_ray(
            &world,
            Point3::new(100.0, 100.0, 100.0),
            Point3::new(200.0, 200.0, 200.0)
        )
        .is_none());
    }

    #[test]
    fn start_voxel_is_excluded() {
        let world = world_with(&[(Point3::new(0, 0, 0), 1), (Point3::new(0, 0, 2), 4)]);
        let hit = intersect_ray(&world, Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, 5.5))
            .expect("ray should hit the far voxel");
        assert_eq!(hit.voxel, Point3::new(0, 0, 2));
        assert_eq!(hit.voxel_type, 4);
    }

    #[test]
    fn voxel_beyond_the_end_point_is_not_hit() {
        let world = world_with(&[(Point3::new(5, 5, 5), 1)]);
        assert!(intersect_ray(&world, Point3::new(5.5, 5.5, -10.0), Point3::new(5.5, 5.5, 4.0))
            .is_none());
    }

    #[test]
    fn degenerate_ray_yields_no_hit() {
        let world = world_with(&[(Point3::new(0, 0, 0), 1)]);
        let point = Point3::new(-0.5, 0.5, 0.5);
        assert!(intersect_ray(&world, point, point).is_none());
    }

    #[test]
    fn diagonal_ray_reports_the_crossed_axis() {
        let world = world_with(&[(Point3::new(3, 0, 0), 1)]);
        let hit = intersect_ray(&world, Point3::new(0.5, 0.25, 0.5), Point3::new(6.5, 0.75, 0.5))
            .expect("ray should hit");
        assert_eq!(hit.voxel, Point3::new(3, 0, 0));
        assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
        assert!((hit.position.x - 3.0).abs() < 1e-4);
    }

    #[test]
    fn long_empty_ray_terminates() {
        let world = world_with(&[]);
        // Longer than 2^24 voxels, where f32 distances stop growing by one voxel.
        assert!(intersect_ray(&world, Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, 2.0e7))
            .is_none());
    }

    #[test]
    fn long_ray_still_finds_a_distant_voxel() {
        let far = 17_000_000;
        let world = world_with(&[(Point3::new(0, 0, far), 3)]);
        let hit = intersect_ray(&world, Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, 2.0e7))
            .expect("ray should hit");
        assert_eq!(hit.voxel, Point3::new(0, 0, far));
        assert_eq!(hit.normal, Vector3::new(0, 0, -1));
    }

    #[test]
    fn ray_leaving_the_coordinate_range_stops() {
        let world = world_with(&[]);
        let high = i32::MAX as f32;
        let high_ray = (Point3::new(high, 0.5, 0.5), Point3::new(high + 4096.0, 0.5, 0.5));
        assert!(intersect_ray(&world, high_ray.0, high_ray.1).is_none());

        let low = i32::MIN as f32;
        let low_ray = (Point3::new(0.5, low, 0.5), Point3::new(0.5, low - 4096.0, 0.5));
        assert!(intersect_ray(&world, low_ray.0, low_ray.1).is_none());
    }

    #[test]
    fn ray_reaches_a_voxel_at_the_coordinate_limit() {
        let world = world_with(&[(Point3::new(0, 0, i32::MIN), 8)]);
        // f32 spacing is 256 near 2^31, so offsets stay multiples of it.
        let start = Point3::new(0.5, 0.5, i32::MIN as f32 + 512.0);
        let end = Point3::new(0.5, 0.5, i32::MIN as f32 - 512.0);
        let hit = intersect_ray(&world, start, end).expect("ray should hit");
        assert_eq!(hit.voxel, Point3::new(0, 0, i32::MIN));
        assert_eq!(hit.normal, Vector3::new(0, 0, 1));
        assert_eq!(hit.placement_target(), Point3::new(0, 0, i32::MIN + 1));
    }

    #[test]
    fn placement_target_is_outside_the_struck_face() {
        let world = world_with(&[(Point3::new(-2, 7, 1), 5)]);
        let hit = intersect_ray(&world, Point3::new(-1.5, 12.5, 1.5), Point3::new(-1.5, 0.0, 1.5))
            .expect("ray should hit");
        assert_eq!(hit.normal, Vector3::new(0, 1, 0));
        assert_eq!(hit.removal_target(), Point3::new(-2, 7, 1));
        assert_eq!(hit.placement_target(), Point3::new(-2, 8, 1));
    }
}
