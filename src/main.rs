//! # Voxel World Demo Entry Point
//!
//! Runs the headless demo scene. An optional first argument names a JSON
//! world configuration file.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- world.json
//! ```

fn main() {
    voxel_world::run();
}
