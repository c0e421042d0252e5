//! Cleanup system: removes projectiles that have left the arena.

use hecs::World;

use orchard_core::config::WorldConfig;
use orchard_core::types::Rect;

/// Remove every projectile whose rectangle is no longer fully inside the
/// arena. Runs after impact resolution, so a projectile that hits while
/// straddling the edge still lands its hit. Uses a pre-allocated buffer
/// to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    projectiles: &mut Vec<hecs::Entity>,
    config: &WorldConfig,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    despawn_buffer.clear();

    let arena = config.arena();
    for &entity in projectiles.iter() {
        if let Ok(rect) = world.get::<&Rect>(entity) {
            if !arena.contains(&rect) {
                despawn_buffer.push(entity);
            }
        }
    }

    projectiles.retain(|entity| !despawn_buffer.contains(entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
