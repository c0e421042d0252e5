//! Launch configuration resolved once at startup.

use orchard_core::config::GameMode;
use orchard_sim::engine::SimConfig;

/// Everything the app needs to start a round. Out-of-range participant
/// counts inside `mode` are clamped by the engine, not here.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
    pub mode: GameMode,
    /// Collect bets before the round and settle them after it.
    pub wagering: bool,
    /// Run as a screensaver: an AI exhibition with shooting locked off.
    pub screensaver: bool,
    pub seed: u64,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            wagering: false,
            screensaver: false,
            seed: 42,
        }
    }
}

impl LaunchOptions {
    /// The engine configuration for these options. The screensaver
    /// variant keeps the requested participant count but hands every
    /// fruit to the AI and locks shooting off.
    pub fn sim_config(&self) -> SimConfig {
        let base = if self.screensaver {
            SimConfig::screensaver(self.mode.fruit_count() as u32)
        } else {
            SimConfig::for_mode(self.mode)
        };

        SimConfig {
            seed: self.seed,
            ..base
        }
    }
}
