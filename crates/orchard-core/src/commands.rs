//! Player commands sent from the app layer to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Commands
//! naming an out-of-range fruit, or a fruit whose control kind does not
//! match, are ignored.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Steer a human fruit by a unit direction per axis
    /// (each of `dx`, `dy` is -1.0, 0.0, or 1.0).
    Steer { fruit: usize, dx: f64, dy: f64 },
    /// Snap a human fruit back to the arena center.
    Recenter { fruit: usize },

    // --- Shooting ---
    /// Fire a projectile from a human fruit toward a pointer position.
    Fire { fruit: usize, aim_x: f64, aim_y: f64 },
    /// Flip the global AI-shooting flag (ignored when the launch
    /// configuration locked it off).
    ToggleAiShooting,
}
