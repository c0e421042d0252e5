//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or
//! on the engine.

pub mod cleanup;
pub mod fire_control;
pub mod growth;
pub mod impact;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod win;
