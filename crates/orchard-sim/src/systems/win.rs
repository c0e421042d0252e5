//! Win detection: the first fruit to fill the arena ends the round.

use hecs::World;

use orchard_core::config::WorldConfig;
use orchard_core::types::Rect;

/// Scan fruits in ascending index order and return the first whose width
/// and height both reach the arena's, if any. Runs every tick after
/// clamping, so the threshold is caught the tick it is crossed.
pub fn run(world: &World, fruits: &[hecs::Entity], config: &WorldConfig) -> Option<usize> {
    for (index, &entity) in fruits.iter().enumerate() {
        if let Ok(rect) = world.get::<&Rect>(entity) {
            if rect.w >= config.arena_width && rect.h >= config.arena_height {
                return Some(index);
            }
        }
    }
    None
}
