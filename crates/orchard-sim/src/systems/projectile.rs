//! Projectile kinematics: advances each projectile by its velocity.
//!
//! Projectiles are not clamped; ones that leave the arena are removed
//! by the cleanup system.

use hecs::World;

use orchard_core::components::Projectile;
use orchard_core::types::{Rect, Velocity};

/// Advance every live projectile one tick along its velocity.
pub fn run(world: &mut World) {
    for (_entity, (rect, velocity, _projectile)) in
        world.query_mut::<(&mut Rect, &Velocity, &Projectile)>()
    {
        rect.x += velocity.x;
        rect.y += velocity.y;
    }
}
