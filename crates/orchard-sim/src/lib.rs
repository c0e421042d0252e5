//! Simulation engine for ORCHARD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces WorldSnapshots for the app layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{ArenaEngine, SimConfig};
pub use orchard_core as core;
