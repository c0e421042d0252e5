//! Movement system: human steering and AI chase, with bounds clamping.
//!
//! Each axis moves independently; a fruit misaligned on both axes covers
//! more ground per tick than one misaligned on a single axis.

use hecs::World;

use orchard_core::components::Fruit;
use orchard_core::config::WorldConfig;
use orchard_core::enums::ControlKind;
use orchard_core::types::Rect;

/// Apply one tick of movement to every fruit, then clamp to the arena.
///
/// Human fruits move by their steer direction times `move_speed`; AI
/// fruits chase their own target. `steer` is index-aligned with the
/// fruit roster, `targets` with their owners.
pub fn run(
    world: &mut World,
    targets: &[hecs::Entity],
    config: &WorldConfig,
    steer: &[(f64, f64)],
) {
    // Target rects are read up front; fruits and targets never share an
    // entity, so the mutable pass below cannot alias them.
    let target_rects: Vec<Rect> = targets
        .iter()
        .map(|&entity| world.get::<&Rect>(entity).map(|r| *r).unwrap_or_default())
        .collect();

    for (_entity, (fruit, rect)) in world.query_mut::<(&Fruit, &mut Rect)>() {
        let (dx, dy) = match fruit.control {
            ControlKind::Human => {
                let (sx, sy) = steer[fruit.index];
                (
                    direction(sx) * config.move_speed,
                    direction(sy) * config.move_speed,
                )
            }
            ControlKind::Ai => chase_step(rect, &target_rects[fruit.index], config.move_speed),
        };

        rect.x += dx;
        rect.y += dy;
        rect.clamp_within(config.arena_width, config.arena_height);
    }
}

/// One chase step toward the target, each axis independent. Compares
/// top-left corners; an axis closer than one full step covers exactly the
/// remaining distance instead of overshooting.
pub fn chase_step(rect: &Rect, target: &Rect, speed: f64) -> (f64, f64) {
    (
        axis_step(rect.x, target.x, speed),
        axis_step(rect.y, target.y, speed),
    )
}

fn axis_step(from: f64, to: f64, speed: f64) -> f64 {
    let delta = to - from;
    if delta.abs() <= speed {
        delta
    } else {
        speed * delta.signum()
    }
}

/// Collapse a raw steer value to a unit direction. Anything positive is 1,
/// anything negative is -1, zero (and NaN) stays put.
fn direction(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
