//! Simulation engine: the core of the game.
//!
//! `ArenaEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orchard_core::commands::PlayerCommand;
use orchard_core::components::Fruit;
use orchard_core::config::{GameMode, WorldConfig};
use orchard_core::enums::{ControlKind, RoundPhase};
use orchard_core::events::GameEvent;
use orchard_core::state::WorldSnapshot;
use orchard_core::types::Rect;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new round.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same round.
    pub seed: u64,
    /// Participant layout.
    pub mode: GameMode,
    /// Per-round tuning.
    pub world: WorldConfig,
    /// Whether AI fruits start the round allowed to fire.
    pub ai_shooting: bool,
    /// Locks the AI-shooting flag for the round (screensaver variant).
    pub ai_shooting_locked: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        let mode = GameMode::default();
        Self {
            seed: 42,
            mode,
            world: WorldConfig::for_mode(mode),
            ai_shooting: true,
            ai_shooting_locked: false,
        }
    }
}

impl SimConfig {
    /// Config for a mode with its default tuning.
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode: mode.normalized(),
            world: WorldConfig::for_mode(mode),
            ..Self::default()
        }
    }

    /// Screensaver variant: an AI exhibition with shooting forced off.
    pub fn screensaver(fruit_count: u32) -> Self {
        Self {
            ai_shooting: false,
            ai_shooting_locked: true,
            ..Self::for_mode(GameMode::AiVsAi { fruit_count })
        }
    }
}

/// The simulation engine. Owns the ECS world and all round state.
pub struct ArenaEngine {
    world: World,
    config: WorldConfig,
    tick: u64,
    phase: RoundPhase,
    winner: Option<usize>,
    ai_shooting: bool,
    ai_shooting_locked: bool,
    rng: ChaCha8Rng,
    /// Fruit entities in ascending index order; fixed for the round.
    fruits: Vec<hecs::Entity>,
    /// Target entities, index-aligned with `fruits`.
    targets: Vec<hecs::Entity>,
    /// Live projectile entities in spawn order.
    projectiles: Vec<hecs::Entity>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    /// Raw human steer directions for the current tick, index-aligned
    /// with `fruits`.
    steer_intents: Vec<(f64, f64)>,
    /// Human fire aims for the current tick, index-aligned with `fruits`.
    fire_requests: Vec<Option<DVec2>>,
}

impl ArenaEngine {
    /// Create a new engine with the given config and spawn the round.
    pub fn new(config: SimConfig) -> Self {
        let mode = config.mode.normalized();
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let (fruits, targets) = world_setup::setup_round(&mut world, &mut rng, mode, &config.world);
        let fruit_count = fruits.len();

        Self {
            world,
            config: config.world,
            tick: 0,
            phase: RoundPhase::Running,
            winner: None,
            ai_shooting: config.ai_shooting,
            ai_shooting_locked: config.ai_shooting_locked,
            rng,
            fruits,
            targets,
            projectiles: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            steer_intents: vec![(0.0, 0.0); fruit_count],
            fire_requests: vec![None; fruit_count],
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Once the round is complete the world is frozen and further calls
    /// return the final state.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == RoundPhase::Running {
            self.run_systems();
            self.tick += 1;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.tick,
            self.phase,
            self.winner,
            self.ai_shooting,
            &self.fruits,
            &self.targets,
            &self.projectiles,
            events,
        )
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the winning fruit index, if the round is complete.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Get the current tick number.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Whether AI fruits may fire.
    pub fn ai_shooting(&self) -> bool {
        self.ai_shooting
    }

    /// Number of fruits in the round.
    pub fn fruit_count(&self) -> usize {
        self.fruits.len()
    }

    /// Get the round's world tuning.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Directly place a fruit's rectangle (for tests).
    #[cfg(test)]
    pub fn set_fruit_rect(&mut self, index: usize, rect: Rect) {
        if let Ok(mut r) = self.world.get::<&mut Rect>(self.fruits[index]) {
            *r = rect;
        }
    }

    /// Read a fruit's rectangle (for tests).
    #[cfg(test)]
    pub fn fruit_rect(&self, index: usize) -> Rect {
        self.world
            .get::<&Rect>(self.fruits[index])
            .map(|r| *r)
            .unwrap_or_default()
    }

    /// Directly place a target's rectangle (for tests).
    #[cfg(test)]
    pub fn set_target_rect(&mut self, index: usize, rect: Rect) {
        if let Ok(mut r) = self.world.get::<&mut Rect>(self.targets[index]) {
            *r = rect;
        }
    }

    /// Read a target's rectangle (for tests).
    #[cfg(test)]
    pub fn target_rect(&self, index: usize) -> Rect {
        self.world
            .get::<&Rect>(self.targets[index])
            .map(|r| *r)
            .unwrap_or_default()
    }

    /// Override a fruit's remaining shots (for tests).
    #[cfg(test)]
    pub fn set_remaining_shots(&mut self, index: usize, remaining: u32) {
        use orchard_core::components::ShotBudget;
        if let Ok(mut budget) = self.world.get::<&mut ShotBudget>(self.fruits[index]) {
            budget.remaining = remaining;
        }
    }

    /// Spawn a projectile directly, bypassing fire control (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        owner: usize,
        rect: Rect,
        velocity: orchard_core::types::Velocity,
    ) {
        use orchard_core::components::{Projectile, Tint};
        let entity = self
            .world
            .spawn((Projectile { owner }, rect, velocity, Tint::default()));
        self.projectiles.push(entity);
    }

    /// Number of live projectiles (for tests).
    #[cfg(test)]
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// The fruit roster in ascending index order (for tests).
    #[cfg(test)]
    pub fn fruit_entities(&self) -> &[hecs::Entity] {
        &self.fruits
    }

    /// Process all queued commands. Steering and fire intents are
    /// rebuilt from scratch each tick.
    fn process_commands(&mut self) {
        self.steer_intents.fill((0.0, 0.0));
        self.fire_requests.fill(None);

        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands naming an out-of-range
    /// fruit or a non-human fruit are ignored; commands arriving after
    /// the round completed are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == RoundPhase::Complete {
            return;
        }

        match command {
            PlayerCommand::Steer { fruit, dx, dy } => {
                if self.control_of(fruit) == Some(ControlKind::Human) {
                    self.steer_intents[fruit] = (dx, dy);
                }
            }
            PlayerCommand::Recenter { fruit } => {
                if self.control_of(fruit) == Some(ControlKind::Human) {
                    let (arena_w, arena_h) = (self.config.arena_width, self.config.arena_height);
                    if let Ok(mut rect) = self.world.get::<&mut Rect>(self.fruits[fruit]) {
                        rect.x = (arena_w - rect.w) / 2.0;
                        rect.y = (arena_h - rect.h) / 2.0;
                        rect.clamp_within(arena_w, arena_h);
                    }
                }
            }
            PlayerCommand::Fire { fruit, aim_x, aim_y } => {
                if self.control_of(fruit) == Some(ControlKind::Human) {
                    self.fire_requests[fruit] = Some(DVec2::new(aim_x, aim_y));
                }
            }
            PlayerCommand::ToggleAiShooting => {
                if !self.ai_shooting_locked {
                    self.ai_shooting = !self.ai_shooting;
                }
            }
        }
    }

    /// Control kind of the fruit at `index`, if it exists.
    fn control_of(&self, index: usize) -> Option<ControlKind> {
        let entity = *self.fruits.get(index)?;
        self.world.get::<&Fruit>(entity).ok().map(|f| f.control)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement: human steering and AI chase, clamped to the arena
        systems::movement::run(
            &mut self.world,
            &self.targets,
            &self.config,
            &self.steer_intents,
        );
        // 2. Growth: consume targets, relocate them, grow the eater
        systems::growth::run(
            &mut self.world,
            &self.fruits,
            &self.targets,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        // 3. Fire control: AI shot selection plus queued human fire requests
        systems::fire_control::run(
            &mut self.world,
            &self.fruits,
            &mut self.projectiles,
            &self.config,
            self.ai_shooting,
            &self.fire_requests,
            &mut self.events,
        );
        // 4. Projectile kinematics
        systems::projectile::run(&mut self.world);
        // 5. Impact resolution: shrink struck fruits, remove spent projectiles
        systems::impact::run(
            &mut self.world,
            &self.fruits,
            &mut self.projectiles,
            &self.config,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Cleanup: remove projectiles that left the arena
        systems::cleanup::run(
            &mut self.world,
            &mut self.projectiles,
            &self.config,
            &mut self.despawn_buffer,
        );
        // 7. Win detection
        if let Some(index) = systems::win::run(&self.world, &self.fruits, &self.config) {
            self.winner = Some(index);
            self.phase = RoundPhase::Complete;
            self.events.push(GameEvent::RoundWon { fruit: index });
        }
    }
}
