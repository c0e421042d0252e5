//! Growth system: fruits consume their own target and grow.
//!
//! A consumed target relocates to a fresh random position; it is never
//! despawned.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use orchard_core::config::WorldConfig;
use orchard_core::events::GameEvent;
use orchard_core::types::Rect;

use crate::world_setup;

/// Resolve fruit-target consumption for every fruit in ascending index
/// order. Growth is unconditional and uncapped; the win check caps it.
pub fn run(
    world: &mut World,
    fruits: &[hecs::Entity],
    targets: &[hecs::Entity],
    config: &WorldConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..fruits.len() {
        let fruit_rect = match world.get::<&Rect>(fruits[index]) {
            Ok(rect) => *rect,
            Err(_) => continue,
        };
        let target_rect = match world.get::<&Rect>(targets[index]) {
            Ok(rect) => *rect,
            Err(_) => continue,
        };

        if !fruit_rect.intersects(&target_rect) {
            continue;
        }

        let (x, y) = world_setup::random_target_position(rng, config);
        if let Ok(mut rect) = world.get::<&mut Rect>(targets[index]) {
            rect.x = x;
            rect.y = y;
        }

        if let Ok(mut rect) = world.get::<&mut Rect>(fruits[index]) {
            rect.w += config.growth_increment;
            rect.h += config.growth_increment;
            rect.clamp_within(config.arena_width, config.arena_height);
        }

        events.push(GameEvent::TargetConsumed { fruit: index });
    }
}
