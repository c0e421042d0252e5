//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ControlKind;

/// A growable arena actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fruit {
    /// Stable index in `[0, fruit_count)`, fixed for the round.
    pub index: usize,
    /// Who steers and fires this fruit.
    pub control: ControlKind,
}

/// Shots a fruit may still fire. Never exceeds the configured maximum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotBudget {
    pub remaining: u32,
}

/// The relocating pickup a fruit grows by consuming. One per fruit;
/// relocated on consumption, never despawned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Index of the fruit that may consume this target.
    pub owner: usize,
}

/// A fired projectile. A projectile never hits its own owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Index of the fruit that fired it.
    pub owner: usize,
}

/// Display tint (RGB). Targets and projectiles carry their owner's tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// Rect and Velocity are defined in types.rs and used as ECS components.
