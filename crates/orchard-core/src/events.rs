//! Events emitted by the simulation for app-layer feedback.

use serde::{Deserialize, Serialize};

/// Simulation events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fruit reached its target and grew.
    TargetConsumed { fruit: usize },
    /// A fruit fired a projectile.
    ShotFired { fruit: usize, remaining: u32 },
    /// A projectile struck a fruit.
    FruitHit { fruit: usize, owner: usize },
    /// A fruit filled the arena and the round is over.
    RoundWon { fruit: usize },
}
