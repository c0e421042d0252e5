//! Entity spawn factories for setting up the round world.
//!
//! Creates fruit and target entities with appropriate component bundles.
//! Placement draws from the engine's seeded RNG.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use orchard_core::components::{Fruit, ShotBudget, Target, Tint};
use orchard_core::config::{GameMode, WorldConfig};
use orchard_core::constants::PALETTE;
use orchard_core::types::Rect;

/// Set up the round: one fruit per participant, plus its target.
/// Returns the fruit and target rosters in ascending index order.
pub fn setup_round(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    mode: GameMode,
    config: &WorldConfig,
) -> (Vec<hecs::Entity>, Vec<hecs::Entity>) {
    let count = mode.fruit_count();
    let mut fruits = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);

    for index in 0..count {
        fruits.push(spawn_fruit(world, rng, index, mode, config));
    }
    for index in 0..count {
        targets.push(spawn_target(world, rng, index, config));
    }

    (fruits, targets)
}

/// Spawn a single fruit at a uniformly-random in-bounds position.
pub fn spawn_fruit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    index: usize,
    mode: GameMode,
    config: &WorldConfig,
) -> hecs::Entity {
    let size = config.start_fruit_size;
    let rect = Rect::new(
        random_coord(rng, config.arena_width - size),
        random_coord(rng, config.arena_height - size),
        size,
        size,
    );

    world.spawn((
        Fruit {
            index,
            control: mode.control_kind(index),
        },
        rect,
        ShotBudget {
            remaining: config.max_shots,
        },
        tint_for(index),
    ))
}

/// Spawn the target owned by the fruit at `index`.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    index: usize,
    config: &WorldConfig,
) -> hecs::Entity {
    let (x, y) = random_target_position(rng, config);
    let rect = Rect::new(x, y, config.target_size, config.target_size);

    world.spawn((Target { owner: index }, rect, tint_for(index)))
}

/// Uniformly-random in-bounds position for a target.
/// Also used when a consumed target relocates.
pub(crate) fn random_target_position(rng: &mut ChaCha8Rng, config: &WorldConfig) -> (f64, f64) {
    (
        random_coord(rng, config.arena_width - config.target_size),
        random_coord(rng, config.arena_height - config.target_size),
    )
}

/// Uniform coordinate in `[0, limit)`, or 0 when the span is degenerate.
pub(crate) fn random_coord(rng: &mut ChaCha8Rng, limit: f64) -> f64 {
    if limit > 0.0 {
        rng.gen_range(0.0..limit)
    } else {
        0.0
    }
}

/// Tint for the fruit at `index`. Its target and projectiles reuse it.
pub(crate) fn tint_for(index: usize) -> Tint {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Tint { r, g, b }
}
