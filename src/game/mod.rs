//! # Game Utilities
//!
//! Small frame-driven helpers for game objects living in a voxel world:
//!
//! * [`fsm`] - a finite state machine with per-state enter/update/exit handlers
//! * [`coroutine`] - cooperative tasks that span several frames
//!
//! Neither owns a clock. The caller drives both once per frame.

pub mod coroutine;
pub mod fsm;
