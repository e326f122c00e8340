//! # Demo Scene
//!
//! A headless version of the voxel geometry scene: a rolling sine-wave
//! terrain spread over 2×2×2 cells, meshed cell by cell, then edited through a
//! pick ray cast from the scene's camera position toward its look-at target.

use std::f32::consts::PI;

use cgmath::Point3;
use log::info;
use web_time::Instant;

use crate::config::WorldConfig;
use crate::error::VoxelError;
use crate::voxels::block::VoxelTypeId;
use crate::voxels::cell::CellId;
use crate::voxels::raycast::RayHit;
use crate::voxels::world::VoxelWorld;

/// Number of cells the terrain spans along each axis.
pub const TERRAIN_CELLS_PER_AXIS: i32 = 2;
/// Terrain voxels use type ids in `1..TERRAIN_MAX_VOXEL_TYPE`.
pub const TERRAIN_MAX_VOXEL_TYPE: VoxelTypeId = 17;
/// The type id placed by the demo edit.
pub const PLACED_VOXEL_TYPE: VoxelTypeId = 1;

/// What the demo did, for logging and for tests.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    /// Allocated cells after terrain generation
    pub cells: usize,
    /// Faces across the initial meshes of every cell
    pub faces: usize,
    /// Result of the pick ray
    pub hit: Option<RayHit>,
    /// Voxel written by the edit, if the ray hit anything
    pub placed: Option<Point3<i32>>,
    /// Cells rebuilt after the edit, in rebuild order
    pub rebuilt_cells: Vec<CellId>,
}

/// Fills `world` with the sine-wave heightfield, drawing voxel types from `rng`.
///
/// Returns the number of voxels written.
pub fn generate_terrain(world: &mut VoxelWorld, rng: &mut fastrand::Rng) -> usize {
    let cell_size = world.cell_size();
    let size = cell_size as f32;
    let extent = cell_size * TERRAIN_CELLS_PER_AXIS;
    let mut written = 0;

    for y in 0..extent {
        for z in 0..extent {
            for x in 0..extent {
                let height = ((x as f32 / size * PI * 2.0).sin()
                    + (z as f32 / size * PI * 3.0).sin())
                    * (size / 6.0)
                    + size / 2.0;
                if (y as f32) < height {
                    world.set_voxel(Point3::new(x, y, z), rng.u8(1..TERRAIN_MAX_VOXEL_TYPE));
                    written += 1;
                }
            }
        }
    }
    written
}

/// The demo's pick ray: from the camera position, through the look-at target, three times as far.
pub fn pick_ray(cell_size: i32) -> (Point3<f32>, Point3<f32>) {
    let size = cell_size as f32;
    let camera = Point3::new(-size * 0.3, size * 0.8, -size * 0.3);
    let target = Point3::new(size / 2.0, size / 3.0, size / 2.0);
    let end = camera + (target - camera) * 3.0;
    (camera, end)
}

/// Runs the demo scene with `config`, seeding the terrain palette with `seed`.
///
/// # Errors
/// Returns an error if `config` is invalid.
pub fn run_demo(config: WorldConfig, seed: u64) -> Result<DemoSummary, VoxelError> {
    let mut world = VoxelWorld::new(config)?;
    let mut rng = fastrand::Rng::with_seed(seed);

    let start = Instant::now();
    let written = generate_terrain(&mut world, &mut rng);
    info!(
        "Generated terrain: {} voxels in {} cells ({:?})",
        written,
        world.cell_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let faces: usize = world
        .cell_ids()
        .into_iter()
        .map(|cell| world.generate_geometry_data_for_cell(cell).face_count())
        .sum();
    info!("Meshed {} cells: {} faces ({:?})", world.cell_count(), faces, start.elapsed());

    let cells = world.cell_count();
    let (ray_start, ray_end) = pick_ray(world.cell_size());
    let hit = world.intersect_ray(ray_start, ray_end);

    let mut placed = None;
    let mut rebuilt_cells = Vec::new();
    match hit {
        Some(hit) => {
            info!(
                "Pick ray hit voxel {:?} (type {}) at {:?}",
                hit.voxel, hit.voxel_type, hit.position
            );
            let target = hit.placement_target();
            world.set_voxel(target, PLACED_VOXEL_TYPE);

            for cell in world.cells_affected_by(target) {
                let mesh = world.generate_geometry_data_for_cell(cell);
                info!("Rebuilt cell {}: {} faces", cell, mesh.face_count());
                rebuilt_cells.push(cell);
            }
            placed = Some(target);
        }
        None => info!("Pick ray from {:?} missed", ray_start),
    }

    Ok(DemoSummary {
        cells,
        faces,
        hit,
        placed,
        rebuilt_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::AIR;

    #[test]
    fn terrain_stays_in_the_bottom_layer_of_cells() {
        let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        let written = generate_terrain(&mut world, &mut rng);

        assert!(written > 0);
        assert_eq!(
            world.cell_ids(),
            vec![
                CellId::new(0, 0, 0),
                CellId::new(0, 0, 1),
                CellId::new(1, 0, 0),
                CellId::new(1, 0, 1),
            ]
        );
        // Column at the origin reaches y < 16.
        assert_ne!(world.get_voxel(Point3::new(0, 15, 0)), AIR);
        assert_eq!(world.get_voxel(Point3::new(0, 16, 0)), AIR);
    }

    #[test]
    fn terrain_types_come_from_the_palette() {
        let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
        let mut rng = fastrand::Rng::with_seed(11);
        generate_terrain(&mut world, &mut rng);
        let cell = world.cell(CellId::new(0, 0, 0)).unwrap();
        assert!(cell
            .iter_solid()
            .all(|(_, voxel_type)| (1..TERRAIN_MAX_VOXEL_TYPE).contains(&voxel_type)));
    }

    #[test]
    fn demo_places_a_voxel_and_rebuilds_its_cells() {
        let summary = run_demo(WorldConfig::default(), 42).unwrap();
        assert_eq!(summary.cells, 4);
        assert!(summary.faces > 0);

        let hit = summary.hit.expect("pick ray should reach the terrain");
        let placed = summary.placed.unwrap();
        assert_eq!(placed, hit.voxel + hit.normal);
        assert!(!summary.rebuilt_cells.is_empty());
        assert_eq!(summary.rebuilt_cells[0], CellId::new(0, 0, 0));
    }

    #[test]
    fn demo_is_reproducible_for_a_seed() {
        let first = run_demo(WorldConfig::default(), 3).unwrap();
        let second = run_demo(WorldConfig::default(), 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn demo_rejects_invalid_config() {
        assert!(run_demo(WorldConfig::with_cell_size(0), 1).is_err());
    }
}
