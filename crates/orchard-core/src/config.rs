//! Round configuration, fixed at setup.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ControlKind;
use crate::types::Rect;

/// Launch mode with participant counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameMode {
    /// Two human fruits.
    #[default]
    PvP,
    /// One human fruit against `ai_count` AI fruits.
    PvAi { ai_count: u32 },
    /// AI fruits only (exhibition / screensaver rounds).
    AiVsAi { fruit_count: u32 },
}

impl GameMode {
    /// Clamp participant counts into their allowed ranges.
    /// Out-of-range counts are not an error.
    pub fn normalized(self) -> Self {
        match self {
            GameMode::PvP => GameMode::PvP,
            GameMode::PvAi { ai_count } => GameMode::PvAi {
                ai_count: ai_count.clamp(MIN_AI_OPPONENTS, MAX_AI_OPPONENTS),
            },
            GameMode::AiVsAi { fruit_count } => GameMode::AiVsAi {
                fruit_count: fruit_count.clamp(MIN_EXHIBITION_FRUITS, MAX_EXHIBITION_FRUITS),
            },
        }
    }

    /// Total number of fruits in the round.
    pub fn fruit_count(self) -> usize {
        match self.normalized() {
            GameMode::PvP => 2,
            GameMode::PvAi { ai_count } => 1 + ai_count as usize,
            GameMode::AiVsAi { fruit_count } => fruit_count as usize,
        }
    }

    /// Control kind of the fruit at `index`.
    pub fn control_kind(self, index: usize) -> ControlKind {
        match self.normalized() {
            GameMode::PvP => ControlKind::Human,
            GameMode::PvAi { .. } => {
                if index == 0 {
                    ControlKind::Human
                } else {
                    ControlKind::Ai
                }
            }
            GameMode::AiVsAi { .. } => ControlKind::Ai,
        }
    }
}

/// Immutable per-round tuning. All distances are pixels, all rates are
/// per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    pub move_speed: f64,
    pub projectile_speed: f64,
    pub projectile_size: f64,
    pub growth_increment: f64,
    pub shrink_amount: f64,
    pub min_fruit_size: f64,
    pub start_fruit_size: f64,
    pub target_size: f64,
    pub max_shots: u32,
    pub tax_rate: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            move_speed: MOVE_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            growth_increment: GROWTH_INCREMENT,
            shrink_amount: SHRINK_AMOUNT_VERSUS,
            min_fruit_size: MIN_FRUIT_SIZE,
            start_fruit_size: START_FRUIT_SIZE,
            target_size: TARGET_SIZE,
            max_shots: MAX_SHOTS,
            tax_rate: TAX_RATE,
        }
    }
}

impl WorldConfig {
    /// Default tuning for a mode. AI exhibitions use the gentler shrink
    /// amount.
    pub fn for_mode(mode: GameMode) -> Self {
        let shrink_amount = match mode.normalized() {
            GameMode::AiVsAi { .. } => SHRINK_AMOUNT_EXHIBITION,
            _ => SHRINK_AMOUNT_VERSUS,
        };
        Self {
            shrink_amount,
            ..Self::default()
        }
    }

    /// The arena rectangle, anchored at the origin.
    pub fn arena(&self) -> Rect {
        Rect::new(0.0, 0.0, self.arena_width, self.arena_height)
    }
}
