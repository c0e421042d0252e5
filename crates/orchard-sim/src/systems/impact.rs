//! Impact resolution: projectiles shrink the first non-owner fruit they
//! intersect and are spent on the hit.
//!
//! Projectiles resolve in spawn order; candidate fruits are scanned in
//! ascending index order, so the lowest index wins simultaneous overlaps.

use hecs::World;

use orchard_core::components::Projectile;
use orchard_core::config::WorldConfig;
use orchard_core::events::GameEvent;
use orchard_core::types::Rect;

/// Resolve projectile hits for this tick. Struck fruits shrink floored at
/// the minimum size and are re-clamped. Spent projectiles despawn through
/// the shared buffer.
pub fn run(
    world: &mut World,
    fruits: &[hecs::Entity],
    projectiles: &mut Vec<hecs::Entity>,
    config: &WorldConfig,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    despawn_buffer.clear();

    for &proj_entity in projectiles.iter() {
        let owner = match world.get::<&Projectile>(proj_entity) {
            Ok(projectile) => projectile.owner,
            Err(_) => continue,
        };
        let proj_rect = match world.get::<&Rect>(proj_entity) {
            Ok(rect) => *rect,
            Err(_) => continue,
        };

        // Fruit rects are re-read per projectile: an earlier hit this tick
        // may already have shrunk a candidate.
        let mut hit = None;
        for (index, &fruit_entity) in fruits.iter().enumerate() {
            if index == owner {
                continue;
            }
            let fruit_rect = match world.get::<&Rect>(fruit_entity) {
                Ok(rect) => *rect,
                Err(_) => continue,
            };
            if proj_rect.intersects(&fruit_rect) {
                hit = Some(index);
                break;
            }
        }

        if let Some(index) = hit {
            if let Ok(mut rect) = world.get::<&mut Rect>(fruits[index]) {
                rect.w = (rect.w - config.shrink_amount).max(config.min_fruit_size);
                rect.h = (rect.h - config.shrink_amount).max(config.min_fruit_size);
                rect.clamp_within(config.arena_width, config.arena_height);
            }
            events.push(GameEvent::FruitHit { fruit: index, owner });
            despawn_buffer.push(proj_entity);
        }
    }

    projectiles.retain(|entity| !despawn_buffer.contains(entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
