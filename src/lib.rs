#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A sparse voxel world engine: chunked voxel storage, face-culled mesh
//! generation per cell, and ray/voxel intersection for picking.
//!
//! ## Key Modules
//!
//! * `voxels` - Voxel storage, cells, faces and the ray traversal
//! * `rendering` - Texture atlas layout and per-cell mesh generation
//! * `game` - Finite state machine and coroutine runner for game objects
//! * `config` - World settings, loadable from JSON
//! * `demo` - The headless demo scene driven by the binary
//!
//! ## Architecture
//!
//! The world is split into cubic cells that are allocated on the first write
//! into their range. Meshes are built one cell at a time and are never cached
//! by the world: after an edit the caller rebuilds the cells reported by
//! [`VoxelWorld::cells_affected_by`]. Mesh output is plain `Vec<f32>`/`Vec<u32>`
//! buffers, so the crate does not depend on any graphics API.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_world::{VoxelWorld, WorldConfig};
//!
//! let mut world = VoxelWorld::new(WorldConfig::default()).unwrap();
//! world.set_voxel(Point3::new(5, 5, 5), 1);
//!
//! let hit = world
//!     .intersect_ray(Point3::new(5.5, 5.5, -10.0), Point3::new(5.5, 5.5, 10.0))
//!     .unwrap();
//! assert_eq!(hit.voxel, Point3::new(5, 5, 5));
//!
//! let mesh = world.generate_geometry_data_for_cell(world.compute_cell_id(hit.voxel));
//! assert_eq!(mesh.face_count(), 6);
//! ```

use log::{error, info, warn};

pub mod config;
pub mod demo;
pub mod error;
pub mod game;
pub mod rendering;
pub mod voxels;

pub use config::WorldConfig;
pub use error::VoxelError;
pub use rendering::meshing::MeshData;
pub use voxels::block::{VoxelTypeId, AIR};
pub use voxels::cell::CellId;
pub use voxels::raycast::RayHit;
pub use voxels::world::VoxelWorld;

/// Entry point of the demo binary.
///
/// Initializes logging (`RUST_LOG`, default level `info`), loads the world
/// configuration named by the first command line argument, falling back to
/// defaults, and runs the demo scene.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(&path).unwrap_or_else(|err| {
            warn!("Failed to load config from {}: {}. Using defaults", path, err);
            WorldConfig::default()
        }),
        None => WorldConfig::default(),
    };

    let seed = fastrand::u64(..);
    info!("Running demo scene with seed {}", seed);

    match demo::run_demo(config, seed) {
        Ok(summary) => info!(
            "Demo finished: {} cells, {} faces, {} cells rebuilt after edit",
            summary.cells,
            summary.faces,
            summary.rebuilt_cells.len()
        ),
        Err(err) => error!("Demo failed: {}", err),
    }
}
