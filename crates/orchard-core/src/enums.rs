//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who drives a fruit's movement and fire decisions.
/// Resolved once at setup; per-tick logic never inspects fruit indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    #[default]
    Human,
    Ai,
}

/// Round lifecycle (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ticks advance the simulation.
    #[default]
    Running,
    /// A winner has been declared; world state is frozen.
    Complete,
}
