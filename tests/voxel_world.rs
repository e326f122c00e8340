use cgmath::{Point3, Vector3};
use voxel_world::game::coroutine::{CoroutineRunner, CoroutineStep};
use voxel_world::{CellId, VoxelError, VoxelWorld, WorldConfig, AIR};

fn world() -> VoxelWorld {
    VoxelWorld::new(WorldConfig::default()).unwrap()
}

#[test]
fn unwritten_space_reads_as_air_without_allocating() {
    let world = world();
    for position in [(0, 0, 0), (-1, -1, -1), (1000, -2000, 3000)] {
        assert_eq!(world.get_voxel(Point3::new(position.0, position.1, position.2)), AIR);
    }
    assert_eq!(world.cell_count(), 0);
}

#[test]
fn set_then_clear_round_trips() {
    let mut world = world();
    let position = Point3::new(-7, 40, 12);
    world.set_voxel(position, 9);
    assert_eq!(world.get_voxel(position), 9);
    world.set_voxel(position, AIR);
    assert_eq!(world.get_voxel(position), AIR);
    assert_eq!(world.cell_count(), 1);
}

#[test]
fn cell_ids_partition_space() {
    let world = world();
    assert_eq!(
        world.compute_cell_id(Point3::new(0, 0, 0)),
        world.compute_cell_id(Point3::new(31, 31, 31))
    );
    assert_ne!(
        world.compute_cell_id(Point3::new(31, 0, 0)),
        world.compute_cell_id(Point3::new(32, 0, 0))
    );
    assert_eq!(world.compute_cell_id(Point3::new(-1, 0, 0)), CellId::new(-1, 0, 0));
    assert_eq!(CellId::new(-1, 0, 2).to_string(), "-1,0,2");
}

#[test]
fn edit_pick_and_rebuild_cycle() {
    let mut world = world();
    for x in 0..64 {
        for z in 0..64 {
            world.set_voxel(Point3::new(x, 0, z), 3);
        }
    }

    let hit = world
        .intersect_ray(Point3::new(31.5, 10.5, 31.5), Point3::new(31.5, -10.5, 31.5))
        .unwrap();
    assert_eq!(hit.voxel, Point3::new(31, 0, 31));
    assert_eq!(hit.normal, Vector3::new(0, 1, 0));
    assert_eq!(hit.voxel_type, 3);

    let target = hit.placement_target();
    assert_eq!(target, Point3::new(31, 1, 31));
    world.set_voxel(target, 5);

    let affected = world.cells_affected_by(target);
    assert_eq!(
        affected,
        vec![CellId::new(0, 0, 0), CellId::new(1, 0, 0), CellId::new(0, 0, 1)]
    );

    // Floor of 32x32 tops plus the lone voxel's 5 exposed faces; the floor
    // top under it is hidden.
    let mesh = world.generate_geometry_data_for_cell(CellId::new(0, 0, 0));
    let floor_faces = 32 * 32 + 32 * 32 + 2 * 32;
    assert_eq!(mesh.face_count(), floor_faces - 1 + 5);
    assert_eq!(mesh.vertex_count(), mesh.face_count() * 4);
    assert_eq!(mesh, world.generate_geometry_data_for_cell(CellId::new(0, 0, 0)));
}

#[test]
fn ray_through_empty_space_misses() {
    let world = world();
    assert!(world
        .intersect_ray(Point3::new(100.0, 100.0, 100.0), Point3::new(200.0, 200.0, 200.0))
        .is_none());
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        VoxelWorld::new(WorldConfig::with_cell_size(0)),
        Err(VoxelError::InvalidCellSize(0))
    ));
    let config = WorldConfig::from_json_str(r#"{ "tile_texture_width": 0 }"#).unwrap();
    assert!(matches!(
        VoxelWorld::new(config),
        Err(VoxelError::InvalidAtlas { field: "tile_texture_width", .. })
    ));
}

#[test]
fn coroutine_drives_edits_over_frames() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let world = Rc::new(RefCell::new(world()));
    let builder = world.clone();
    let mut height = 0;
    let tower = move |_: f32| {
        builder
            .borrow_mut()
            .set_voxel(Point3::new(0, height, 0), 1);
        height += 1;
        if height == 4 {
            CoroutineStep::Done
        } else {
            CoroutineStep::Yield
        }
    };

    let mut runner = CoroutineRunner::new();
    runner.add(tower, 0.0);
    while runner.is_busy() {
        runner.update(1.0 / 60.0);
    }

    let world = world.borrow();
    assert_eq!(world.get_voxel(Point3::new(0, 3, 0)), 1);
    assert_eq!(world.get_voxel(Point3::new(0, 4, 0)), AIR);
    let mesh = world.generate_geometry_data_for_cell(CellId::new(0, 0, 0));
    assert_eq!(mesh.face_count(), 4 * 4 + 2);
}
