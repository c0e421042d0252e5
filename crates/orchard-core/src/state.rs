//! World snapshot: the complete visible state handed to the render sink
//! each tick.

use serde::{Deserialize, Serialize};

use crate::components::Tint;
use crate::enums::{ControlKind, RoundPhase};
use crate::events::GameEvent;
use crate::types::Rect;

/// Complete world state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Tick this snapshot was built on.
    pub tick: u64,
    pub phase: RoundPhase,
    /// Winning fruit index once the round is complete.
    pub winner: Option<usize>,
    /// Whether AI fruits may fire this round.
    pub ai_shooting: bool,
    /// Fruits in ascending index order.
    pub fruits: Vec<FruitView>,
    /// Targets in ascending owner order.
    pub targets: Vec<TargetView>,
    /// Live projectiles in spawn order.
    pub projectiles: Vec<ProjectileView>,
    /// Fruit indices sorted biggest first; smaller fruits draw on top.
    pub draw_order: Vec<usize>,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

/// A fruit on the arena.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FruitView {
    pub index: usize,
    pub rect: Rect,
    pub tint: Tint,
    pub control: ControlKind,
    pub remaining_shots: u32,
    /// Transparency hint: reduced while this fruit overlaps another fruit
    /// or its own target.
    pub alpha: f64,
}

/// A fruit's target pickup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub owner: usize,
    pub rect: Rect,
    pub tint: Tint,
}

/// A live projectile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: usize,
    pub rect: Rect,
    pub tint: Tint,
}
